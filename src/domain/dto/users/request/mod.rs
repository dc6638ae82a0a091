//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator`로 형식 규칙을 검증합니다.
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 이는 `AppError::ValidationError` (HTTP 400)로 변환됩니다.

pub mod auth_request;
pub mod create_user_request;
pub mod update_user_request;

pub use auth_request::LoginRequest;
pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
