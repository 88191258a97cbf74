//! 인증 관련 설정 관리 모듈
//!
//! bcrypt 해싱 강도와 사용자명 매칭 정책을 관리합니다.

use std::env;

use crate::config::Environment;

/// bcrypt cost 허용 범위
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 15;

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 사용할 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 숫자면 그대로 사용하고,
    /// 그렇지 않으면 실행 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Some(cost) = Self::parse_cost(&cost_str) {
                return cost;
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 환경 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(cost))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 사용자명 조회 시 대소문자 처리 정책
///
/// 정책은 저장소가 결정합니다. 인증 서비스는 정책을 알지 못합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernameMatch {
    /// 정확히 일치하는 사용자명만 조회
    #[default]
    Exact,
    /// 대소문자를 구분하지 않고 조회
    CaseInsensitive,
}

/// 사용자명 매칭 설정
///
/// ## 환경 변수
/// - `USERNAME_CASE_SENSITIVE`: `false`/`0`/`no` 이면 대소문자 무시 (기본값: true)
pub struct UsernameMatchConfig;

impl UsernameMatchConfig {
    pub fn current() -> UsernameMatch {
        match env::var("USERNAME_CASE_SENSITIVE") {
            Ok(value) => Self::parse(&value),
            Err(_) => UsernameMatch::Exact,
        }
    }

    pub fn parse(value: &str) -> UsernameMatch {
        match value.trim().to_lowercase().as_str() {
            "false" | "0" | "no" | "off" => UsernameMatch::CaseInsensitive,
            _ => UsernameMatch::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_parse_cost_bounds() {
        assert_eq!(PasswordConfig::parse_cost("4"), Some(4));
        assert_eq!(PasswordConfig::parse_cost(" 15 "), Some(15));
        assert_eq!(PasswordConfig::parse_cost("3"), None);
        assert_eq!(PasswordConfig::parse_cost("16"), None);
        assert_eq!(PasswordConfig::parse_cost("twelve"), None);
    }

    #[test]
    fn test_username_match_parse() {
        assert_eq!(UsernameMatchConfig::parse("true"), UsernameMatch::Exact);
        assert_eq!(UsernameMatchConfig::parse("anything"), UsernameMatch::Exact);
        assert_eq!(UsernameMatchConfig::parse("false"), UsernameMatch::CaseInsensitive);
        assert_eq!(UsernameMatchConfig::parse("OFF"), UsernameMatch::CaseInsensitive);
        assert_eq!(UsernameMatchConfig::parse("0"), UsernameMatch::CaseInsensitive);
    }
}
