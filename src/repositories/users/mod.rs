//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) 인터페이스와 두 가지 구현체를 제공합니다.
//!
//! - [`MongoUserStore`](user_repo::MongoUserStore): MongoDB 컬렉션 기반
//! - [`InMemoryUserStore`](memory_store::InMemoryUserStore): 프로세스 내 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserStore, UserStore};
//!
//! let store = MongoUserStore::from_config(&database);
//! let user = store.find_by_username("testuser").await?;
//! ```

pub mod user_repo;
pub mod memory_store;

pub use memory_store::InMemoryUserStore;
pub use user_repo::{MongoUserStore, UserStore};
