//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 저장소는 생성자에서 trait 객체로 주입되므로 실제 데이터베이스 없이도
//! 서비스를 테스트할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthenticationService;
//!
//! let auth_service = AuthenticationService::new(store);
//! let user = auth_service.authenticate("testuser", "password123").await?;
//! ```

pub mod auth;
