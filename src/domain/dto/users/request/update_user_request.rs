//! 사용자 정보 수정 요청 DTO
use serde::Deserialize;
use validator::Validate;

use super::create_user_request::validate_password_whitespace;

/// 이메일이 바뀌면 아바타도 다시 만들어집니다.
/// `password`가 있으면 새로 해싱합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(
        min = 6,
        message = "Please enter a password with 6 or more characters"
    ))]
    #[validate(custom(function = "validate_password_whitespace"))]
    pub password: Option<String>,
}
