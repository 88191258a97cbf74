//! # Domain Module
//!
//! 인증 서비스의 도메인 모델을 정의합니다.
//!
//! - [`entities`] - MongoDB에 저장되는 영속 엔티티 (`User`)

pub mod entities;

pub use entities::*;
