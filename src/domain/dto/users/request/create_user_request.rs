//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
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
    pub password: String,
}

/// 앞뒤 공백이 있는 비밀번호는 복사/붙여넣기 실수로 보고 거부합니다.
pub(crate) fn validate_password_whitespace(password: &str) -> Result<(), ValidationError> {
    if password.trim() != password {
        return Err(ValidationError::new("password_whitespace")
            .with_message("Password must not start or end with whitespace".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Alice".to_string(),
            last_name: "Kim".to_string(),
            email: "alice@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("secret123").validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let errors = request("123").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_padded_password_rejected() {
        assert!(request(" secret123").validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request("secret123");
        req.email = "not-an-email".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
