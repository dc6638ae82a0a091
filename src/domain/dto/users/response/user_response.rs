use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;
use crate::utils::string_utils::format_datetime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            avatar,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
            avatar,
            created_at: format_datetime(&created_at),
            updated_at: format_datetime(&updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_never_contains_password_hash() {
        let mut user = User::new(
            "Alice".to_string(),
            "Kim".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        let id = ObjectId::new();
        user.id = Some(id);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], id.to_hex());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("secret-hash"));
    }
}
