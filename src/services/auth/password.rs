//! 비밀번호 해싱/검증 헬퍼
//!
//! bcrypt 적응형 해시를 사용합니다. 해시 문자열에 salt와 cost가 포함되므로
//! 검증 시 별도의 설정이 필요 없습니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 환경별 cost로 비밀번호를 해싱합니다.
pub fn hash_password(password: &str) -> AppResult<String> {
    hash_password_with_cost(password, PasswordConfig::bcrypt_cost())
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> AppResult<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호를 저장된 해시와 비교합니다.
///
/// 비교는 bcrypt가 수행하며, 해시를 파싱할 수 없으면 검증 실패로 취급합니다.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match bcrypt::verify(password, password_hash) {
        Ok(is_valid) => is_valid,
        Err(e) => {
            log::warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
            false
        }
    }
}
