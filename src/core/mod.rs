//! 애플리케이션 조립 계층
//!
//! 리포지토리와 서비스를 생성해 actix 앱 데이터로 연결하는 [`ServiceRegistry`]를 제공합니다.

pub mod registry;

pub use registry::ServiceRegistry;
