//! 메모리 기반 사용자 저장소
//!
//! [`UserStore`] 계약을 그대로 만족하는 프로세스 내 저장소입니다.
//! 테스트마다 새 인스턴스를 만들어 외부 상태 없이 격리된 환경을 구성합니다.

use std::collections::HashMap;

use async_trait::async_trait;
use caseless::default_case_fold_str;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use unicode_normalization::UnicodeNormalization;

use crate::{
    config::UsernameMatch,
    core::errors::{AppError, AppResult},
    domain::entities::users::User,
    repositories::users::user_repo::UserStore,
};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    matching: UsernameMatch,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matching(matching: UsernameMatch) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            matching,
        }
    }

    /// 사용자를 저장합니다. ID가 없으면 새 `ObjectId`를 부여합니다.
    ///
    /// 매칭 정책 기준으로 같은 사용자명이 이미 있으면 `ConflictError`를 반환합니다.
    pub async fn insert(&self, mut user: User) -> AppResult<User> {
        let key = self.key(&user.username);
        let mut users = self.users.write().await;

        if users.contains_key(&key) {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 사용자명입니다: {}",
                user.username
            )));
        }

        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.insert(key, user.clone());

        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// 저장/조회 키
    ///
    /// 대소문자 무시 정책에서는 정준 분해(NFD) 후 전체 case folding을 적용합니다.
    /// `ß`/`SS`, `Σ`/`σ`/`ς`처럼 collation strength 2에서 같은 사용자명은 같은 키가 됩니다.
    fn key(&self, username: &str) -> String {
        match self.matching {
            UsernameMatch::Exact => username.to_string(),
            UsernameMatch::CaseInsensitive => {
                let decomposed: String = username.nfd().collect();
                default_case_fold_str(&decomposed).nfd().collect()
            }
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let key = self.key(username);
        Ok(self.users.read().await.get(&key).cloned())
    }
}
