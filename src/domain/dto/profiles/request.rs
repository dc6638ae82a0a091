//! 프로필 요청 DTO
//!
//! `skills`는 쉼표로 구분된 문자열로 받습니다. (`"rust, go, typescript"`)
use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_experience_period"))]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_education_period"))]
pub struct AddEducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn check_period(from: NaiveDate, to: Option<NaiveDate>) -> Result<(), ValidationError> {
    match to {
        Some(to) if to < from => Err(ValidationError::new("invalid_period")
            .with_message("'to' date must not be before 'from' date".into())),
        _ => Ok(()),
    }
}

fn validate_experience_period(req: &AddExperienceRequest) -> Result<(), ValidationError> {
    check_period(req.from, req.to)
}

fn validate_education_period(req: &AddEducationRequest) -> Result<(), ValidationError> {
    check_period(req.from, req.to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_become_none() {
        let req: CreateProfileRequest = serde_json::from_str(
            r#"{ "status": "Developer", "skills": "rust", "company": "  ", "website": "example.com" }"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.company, None);
        assert_eq!(req.website.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_experience_period_must_be_ordered() {
        let req: AddExperienceRequest = serde_json::from_str(
            r#"{ "title": "Engineer", "company": "Acme", "from": "2021-01-01", "to": "2020-01-01" }"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }
}
