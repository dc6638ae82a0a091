//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! ID 파싱, URL 정규화, Gravatar 주소 생성 등을 포함합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::errors::errors::AppError;

pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 16진수 문자열을 `ObjectId`로 변환합니다.
///
/// 형식이 잘못된 경우 `ValidationError`를 반환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("Invalid {} format", field_name)))
}

/// 이메일 주소에서 Gravatar 이미지 주소를 만듭니다.
///
/// 크기 200, 등급 g, 기본 이미지 mystery-man.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=g&d=mm", digest)
}

/// 웹사이트 주소를 https 형태로 정규화합니다.
pub fn normalize_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    format!("https://{}", without_scheme)
}

/// 쉼표로 구분된 기술 목록을 분리합니다.
pub fn split_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|skill| skill.trim())
        .filter(|skill| !skill.is_empty())
        .map(|skill| skill.to_string())
        .collect()
}

pub fn format_datetime(value: &DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  a ".to_string())), Some("a".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "user id").unwrap(), id);

        match parse_object_id("not-an-id", "user id") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Invalid user id format"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_gravatar_url_ignores_case_and_whitespace() {
        let a = gravatar_url("Alice@Example.com ");
        let b = gravatar_url("alice@example.com");
        assert_eq!(a, b);
        assert!(a.starts_with("https://www.gravatar.com/avatar/"));
        assert!(a.ends_with("?s=200&r=g&d=mm"));
    }

    #[test]
    fn test_normalize_url_forces_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com/"), "https://example.com");
        assert_eq!(normalize_url("https://example.com/me"), "https://example.com/me");
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills(" rust, go ,, typescript "),
            vec!["rust".to_string(), "go".to_string(), "typescript".to_string()]
        );
        assert!(split_skills("").is_empty());
    }
}
