//! # Application Services
//!
//! 핸들러와 리포지토리 사이의 비즈니스 로직 계층입니다.
//! 모든 서비스는 시작 시 한 번 생성되어 `web::Data`로 공유됩니다.

pub mod auth;
pub mod conversations;
pub mod groups;
pub mod posts;
pub mod profiles;
pub mod users;
