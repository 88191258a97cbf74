//! 사용자 인증 서비스
//!
//! MongoDB에 저장된 사용자(사용자명 + bcrypt 해시)를 대상으로
//! 평문 자격 증명을 검증하는 인증 서비스입니다.
//!
//! # Features
//!
//! - **자격 증명 검증**: 사용자명 조회 + bcrypt 비밀번호 검증
//! - **열거 방지**: 사용자 없음과 비밀번호 불일치를 구분하지 않음
//! - **저장소 주입**: `UserStore` trait으로 MongoDB/메모리 저장소 교체 가능
//! - **MongoDB**: 사용자 데이터 영구 저장, 사용자명 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────┐
//! │ AuthenticationService │ ← 자격 증명 검증
//! └───────────────────────┘
//!            │
//!            ▼
//! ┌───────────────────────┐
//! │       UserStore       │ ← 사용자명으로 조회
//! └───────────────────────┘
//!            │
//!            ▼
//! ┌───────────────────────┐
//! │        MongoDB        │ ← 저장소
//! └───────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_auth_service::db::Database;
//! use user_auth_service::repositories::users::MongoUserStore;
//! use user_auth_service::services::auth::AuthenticationService;
//!
//! let database = Database::new().await?;
//! let store = Arc::new(MongoUserStore::from_config(&database));
//! let auth_service = AuthenticationService::new(store);
//!
//! let user = auth_service.authenticate("testuser", "password123").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
