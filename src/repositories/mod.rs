//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 서비스 계층에는 trait 객체로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::from_config(&database));
//! ```

pub mod users;
