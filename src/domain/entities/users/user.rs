//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반 로컬 계정만 지원하며,
//! 아바타는 이메일에서 파생된 Gravatar 주소를 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::gravatar_url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();
        let email = email.trim().to_lowercase();
        let avatar = gravatar_url(&email);

        Self {
            id: None,
            first_name,
            last_name,
            email,
            password_hash,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email_and_derives_avatar() {
        let user = User::new(
            "Alice".to_string(),
            "Kim".to_string(),
            " Alice@Example.com".to_string(),
            "hash".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.avatar, gravatar_url("alice@example.com"));
        assert_eq!(user.display_name(), "Alice Kim");
    }
}
