//! # 사용자 저장소 구현
//!
//! 인증 서비스가 소비하는 [`UserStore`] 인터페이스와 MongoDB 기반 구현체입니다.
//!
//! ## 특징
//!
//! - **주입 가능한 인터페이스**: 서비스는 `Arc<dyn UserStore>`만 알고 있습니다
//! - **대소문자 정책**: [`UsernameMatch`]에 따라 정확 일치 또는 collation 기반 조회
//! - **데이터 무결성**: 사용자명 유니크 인덱스 관리

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::doc,
    options::{Collation, CollationStrength, FindOneOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    config::{DatabaseConfig, UsernameMatch, UsernameMatchConfig},
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::User,
};

/// 사용자명으로 사용자 레코드를 조회하는 저장소 인터페이스
///
/// 조회 결과가 없으면 `Ok(None)`, 저장소에 접근할 수 없으면
/// `Err(AppError::DatabaseError)`를 반환해야 합니다.
/// 대소문자 구분 여부는 구현체가 결정합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// MongoDB 사용자 저장소
///
/// ### Storage (MongoDB)
/// - **컬렉션명**: `users` (기본값, `USERS_COLLECTION`으로 변경 가능)
/// - **인덱스**: username(unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let store = MongoUserStore::from_config(&database);
/// store.create_indexes().await?;
///
/// let user = store.find_by_username("testuser").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
    matching: UsernameMatch,
}

impl MongoUserStore {
    pub fn new(database: &Database, collection_name: &str, matching: UsernameMatch) -> Self {
        Self {
            collection: database.get_database().collection::<User>(collection_name),
            matching,
        }
    }

    /// 환경 변수 설정(`USERS_COLLECTION`, `USERNAME_CASE_SENSITIVE`)으로 저장소를 생성합니다.
    pub fn from_config(database: &Database) -> Self {
        Self::new(
            database,
            &DatabaseConfig::users_collection(),
            UsernameMatchConfig::current(),
        )
    }

    /// 타입이 지정된 컬렉션 핸들
    ///
    /// 테스트 데이터 적재나 컬렉션 정리 같은 하네스 작업에 사용합니다.
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    pub fn matching(&self) -> UsernameMatch {
        self.matching
    }

    /// 대소문자 무시 정책일 때 사용하는 collation (strength 2: 대소문자 무시)
    fn collation(&self) -> Option<Collation> {
        match self.matching {
            UsernameMatch::Exact => None,
            UsernameMatch::CaseInsensitive => Some(
                Collation::builder()
                    .locale("en".to_string())
                    .strength(CollationStrength::Secondary)
                    .build(),
            ),
        }
    }

    /// 사용자명 유니크 인덱스를 생성합니다.
    ///
    /// 대소문자 무시 정책에서는 인덱스에도 같은 collation을 적용하여
    /// 대소문자만 다른 사용자명을 중복으로 취급하고 조회가 인덱스를 타도록 합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let options = match self.collation() {
            Some(collation) => IndexOptions::builder()
                .unique(true)
                .name("username_unique_ci".to_string())
                .collation(collation)
                .build(),
            None => IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build(),
        };

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(options)
            .build();

        self.collection
            .create_index(username_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!(
            "📇 사용자명 유니크 인덱스 준비 완료: {} ({:?})",
            self.collection.name(),
            self.matching
        );

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let options = self
            .collation()
            .map(|collation| FindOneOptions::builder().collation(collation).build());

        let user = self
            .collection
            .find_one(doc! { "username": username })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 조회 완료 (found: {})", user.is_some());

        Ok(user)
    }
}
