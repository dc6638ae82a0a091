//! HTTP 핸들러
//!
//! 각 핸들러는 요청 DTO를 `validator`로 검증한 뒤 `web::Data`로 주입된 서비스를 호출합니다.
//! 보호된 핸들러는 `AuthenticatedUser` 추출기를 인자로 받습니다.

pub mod auth;
pub mod conversations;
pub mod groups;
pub mod posts;
pub mod profiles;
pub mod users;
