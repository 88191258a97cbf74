//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, MongoDB 연결 설정
//! - [`auth_config`] - bcrypt cost, 사용자명 매칭 정책
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_auth"
//! export USERS_COLLECTION="users"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"              # 4-15 범위
//! export USERNAME_CASE_SENSITIVE="true"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
