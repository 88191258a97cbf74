//! 인증 서비스 모듈
//!
//! 자격 증명 검증과 bcrypt 비밀번호 헬퍼를 제공합니다.
//!
//! # Security
//!
//! - bcrypt 적응형 해시 검증
//! - 사용자 없음/비밀번호 불일치 결과 통일
//! - 저장소 장애는 별도의 에러로 전파

pub mod authentication_service;
pub mod password;

pub use authentication_service::AuthenticationService;
pub use password::{hash_password, hash_password_with_cost, verify_password};
