use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::groups::ManagerRole;
use crate::utils::string_utils::deserialize_optional_string;

/// 그룹 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    /// 고유 그룹 코드 (영문, 숫자, `-`, `_`)
    #[validate(length(min = 2, max = 50, message = "Code must be 2-50 characters"))]
    #[validate(custom(function = "validate_group_code"))]
    pub code: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

fn validate_group_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::new("group_code")
            .with_message("Code may only contain letters, digits, '-' and '_'".into()))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddManagerRequest {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
    pub role: ManagerRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_code_format() {
        let ok = GroupRequest {
            name: "Rustaceans".into(),
            code: "rust-kr_01".into(),
            description: None,
        };
        assert!(ok.validate().is_ok());

        let bad = GroupRequest {
            code: "rust kr!".into(),
            ..ok
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_manager_role_parses_lowercase() {
        let req: AddManagerRequest =
            serde_json::from_str(r#"{ "user_id": "abc", "role": "mod" }"#).unwrap();
        assert_eq!(req.role, ManagerRole::Mod);
    }
}
