//! # 자격 증명 인증 서비스
//!
//! 사용자명과 평문 비밀번호가 저장된 계정과 일치하는지 판단합니다.
//!
//! ## 결과
//!
//! | 상황 | 반환값 |
//! |------|--------|
//! | 사용자명/비밀번호 일치 | `Ok(Some(user))` |
//! | 존재하지 않는 사용자 | `Ok(None)` |
//! | 비밀번호 불일치 | `Ok(None)` |
//! | 저장소 장애 | `Err(AppError::DatabaseError)` |
//!
//! 존재하지 않는 사용자와 틀린 비밀번호는 같은 결과를 반환하여
//! 사용자명 열거 공격을 막습니다. 존재하지 않는 사용자에 대해서도
//! 더미 해시로 bcrypt 검증을 수행하여 응답 시간 차이를 줄입니다.

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use once_cell::sync::Lazy;

use crate::{
    core::errors::AppResult,
    domain::entities::users::User,
    repositories::users::UserStore,
    services::auth::password::{hash_password, verify_password},
};

/// 존재하지 않는 사용자 조회 시 검증에 사용하는 해시
///
/// 설정된 cost로 한 번만 생성하며, 첫 조회가 해싱 비용을 치르지 않도록 서비스 생성 시 초기화합니다.
static DUMMY_PASSWORD_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("dummy-password-for-timing").ok());

/// 자격 증명 인증 서비스
///
/// 상태를 갖지 않으므로 `Arc`로 감싸 여러 태스크에서 동시에 사용할 수 있습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::from_config(&database));
/// let auth_service = AuthenticationService::new(store);
///
/// match auth_service.authenticate("testuser", "password123").await? {
///     Some(user) => println!("welcome {}", user.username),
///     None => println!("invalid credentials"),
/// }
/// ```
#[derive(Clone)]
pub struct AuthenticationService {
    user_store: Arc<dyn UserStore>,
}

impl AuthenticationService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Lazy::force(&DUMMY_PASSWORD_HASH);
        Self { user_store }
    }

    /// 사용자명과 비밀번호를 검증합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - 인증 성공
    /// * `Ok(None)` - 사용자 없음 또는 비밀번호 불일치
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 저장소 조회 실패
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let start_time = Instant::now();

        let Some(user) = self.user_store.find_by_username(username).await? else {
            if let Some(dummy_hash) = DUMMY_PASSWORD_HASH.as_deref() {
                let _ = verify_password(password, dummy_hash);
            }
            debug!("인증 실패 (took: {:?})", start_time.elapsed());
            return Ok(None);
        };

        let verify_start = Instant::now();
        let is_valid = verify_password(password, &user.password_hash);
        debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            debug!("인증 실패 (took: {:?})", start_time.elapsed());
            return Ok(None);
        }

        debug!("인증 성공 (took: {:?})", start_time.elapsed());
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UsernameMatch;
    use crate::core::errors::AppError;
    use crate::repositories::users::InMemoryUserStore;
    use crate::services::auth::password::hash_password_with_cost;
    use async_trait::async_trait;

    struct UnavailableStore;

    #[async_trait]
    impl UserStore for UnavailableStore {
        async fn find_by_username(&self, _username: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    async fn service_with_user(username: &str, password: &str) -> AuthenticationService {
        let store = InMemoryUserStore::new();
        let password_hash = hash_password_with_cost(password, 4).unwrap();
        store.insert(User::new(username, password_hash)).await.unwrap();
        AuthenticationService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_valid_credentials_return_user() {
        let service = service_with_user("testuser", "password123").await;

        let user = service.authenticate("testuser", "password123").await.unwrap();

        let user = user.expect("expected authenticated user");
        assert_eq!(user.username, "testuser");
        assert!(user.id.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_returns_none() {
        let service = service_with_user("testuser", "password123").await;

        let result = service.authenticate("testuser", "wrongpassword").await.unwrap();
        assert!(result.is_none());

        let result = service.authenticate("testuser", "").await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_dummy_hash_is_ready_after_construction() {
        let _service = AuthenticationService::new(Arc::new(InMemoryUserStore::new()));

        let dummy_hash = Lazy::get(&DUMMY_PASSWORD_HASH).expect("dummy hash must be built eagerly");
        assert!(dummy_hash.is_some());
    }

    #[tokio::test]
    async fn test_unknown_user_returns_none() {
        let service = AuthenticationService::new(Arc::new(InMemoryUserStore::new()));

        assert!(service.authenticate("nobody", "anything").await.unwrap().is_none());
        assert!(service.authenticate("", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let service = service_with_user("testuser", "password123").await;

        let unknown_user = service.authenticate("nobody", "password123").await;
        let wrong_password = service.authenticate("testuser", "nope").await;

        assert!(matches!(unknown_user, Ok(None)));
        assert!(matches!(wrong_password, Ok(None)));
    }

    #[tokio::test]
    async fn test_store_failure_is_error_not_none() {
        let service = AuthenticationService::new(Arc::new(UnavailableStore));

        let result = service.authenticate("testuser", "password123").await;

        match result {
            Err(e) => assert!(e.is_store_failure()),
            Ok(_) => panic!("store failure must not look like invalid credentials"),
        }
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_returns_none() {
        let store = InMemoryUserStore::new();
        store.insert(User::new("legacy", "not-a-bcrypt-hash")).await.unwrap();
        let service = AuthenticationService::new(Arc::new(store));

        let result = service.authenticate("legacy", "not-a-bcrypt-hash").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_repeated_authentication_is_idempotent() {
        let service = service_with_user("testuser", "password123").await;

        let first = service.authenticate("testuser", "password123").await.unwrap();
        let second = service.authenticate("testuser", "password123").await.unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_lookup_follows_store_case_policy() {
        let password_hash = hash_password_with_cost("password123", 4).unwrap();

        let exact = InMemoryUserStore::new();
        exact.insert(User::new("TestUser", password_hash.clone())).await.unwrap();
        let service = AuthenticationService::new(Arc::new(exact));
        assert!(service.authenticate("testuser", "password123").await.unwrap().is_none());

        let insensitive = InMemoryUserStore::with_matching(UsernameMatch::CaseInsensitive);
        insensitive.insert(User::new("TestUser", password_hash)).await.unwrap();
        let service = AuthenticationService::new(Arc::new(insensitive));
        let user = service.authenticate("testuser", "password123").await.unwrap();
        assert_eq!(user.map(|u| u.username), Some("TestUser".to_string()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_authentication() {
        let service = Arc::new(service_with_user("testuser", "password123").await);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let password = if i % 2 == 0 { "password123" } else { "wrongpassword" };
                    (i, service.authenticate("testuser", password).await)
                })
            })
            .collect();

        for handle in handles {
            let (i, result) = handle.await.unwrap();
            let user = result.unwrap();
            assert_eq!(user.is_some(), i % 2 == 0);
        }
    }
}
