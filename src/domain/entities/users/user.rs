//! User Entity Implementation
//!
//! 인증 대상이 되는 사용자 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 사용자명과 bcrypt 해시만 보관합니다. 평문 비밀번호는 저장하지 않으며,
/// `password_hash`는 해시 검증 함수를 통해서만 비교됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// bcrypt 해시 (salt, cost 포함)
    pub password_hash: String,
}

impl User {
    /// 이미 해싱된 비밀번호로 사용자를 생성합니다. ID는 저장소가 부여합니다.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
