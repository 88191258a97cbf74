//! 데이터 및 환경 설정 관리 모듈
//!
//! 실행 환경과 MongoDB 연결 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 값이 없으면 운영 환경으로 간주합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열을 실행 환경으로 변환합니다. 알 수 없는 값은 운영 환경입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "user_auth_dev")
/// - `USERS_COLLECTION`: 사용자 컬렉션 이름 (기본값: "users")
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "user_auth_dev";
    pub const DEFAULT_USERS_COLLECTION: &'static str = "users";

    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string())
    }

    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_USERS_COLLECTION.to_string())
    }
}
