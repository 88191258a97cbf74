//! Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 영속 엔티티들입니다.

pub mod users;
