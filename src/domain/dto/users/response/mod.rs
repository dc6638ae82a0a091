//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 안전한 형태로 전달합니다.
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "first_name": "Alice",
//!   "last_name": "Kim",
//!   "email": "alice@example.com",
//!   "avatar": "https://www.gravatar.com/avatar/...?s=200&r=g&d=mm",
//!   "created_at": "2024-06-01T10:00:00Z",
//!   "updated_at": "2024-06-07T12:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
