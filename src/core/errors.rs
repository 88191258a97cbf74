//! # Application Error Handling System
//!
//! 인증 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror` 기반으로 정의되며, 저장소 장애와 같은 실패만 에러로 표현합니다.
//!
//! ## 에러와 "인증 실패"의 구분
//!
//! 잘못된 자격 증명(존재하지 않는 사용자, 틀린 비밀번호)은 에러가 아닙니다.
//! [`AuthenticationService::authenticate`](crate::services::auth::AuthenticationService::authenticate)는
//! 이 경우 `Ok(None)`을 반환하며, 두 경우는 호출자에게 구분되지 않습니다.
//!
//! | AppError | 사용 시나리오 |
//! |----------|---------------|
//! | `DatabaseError` | MongoDB 연결 실패, 쿼리 실행 오류 (저장소 사용 불가) |
//! | `ConflictError` | 사용자명 중복 |
//! | `ConfigError` | 잘못된 설정값 |
//! | `InternalError` | 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn load(collection: &Collection<User>) -> AppResult<Option<User>> {
//!     collection
//!         .find_one(doc! { "username": "alice" })
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 저장소에 접근할 수 없거나 쿼리가 실패한 경우입니다.
    /// 인증 실패와는 별개의 결과로 호출자에게 전파되며, 이 계층에서 재시도하지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 충돌/중복 에러 (사용자명 유니크 제약 위반)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소 장애 여부
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
