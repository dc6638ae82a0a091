use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::tokens::RefreshToken;
use crate::utils::string_utils::format_datetime;

/// 로그인, 회원가입, 토큰 갱신 성공 응답
#[derive(Debug, Clone, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPairResponse {
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 리프레시 토큰의 외부 노출용 뷰
///
/// 소유자 ID와 저장소 `_id`는 포함하지 않습니다.
/// `is_active`, `is_expired`는 `now` 기준으로 계산됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub token: String,
    pub expires: String,
    pub created: String,
    pub revoked: Option<String>,
    pub replaced_by_token: Option<String>,
    pub is_active: bool,
    pub is_expired: bool,
}

impl RefreshTokenResponse {
    pub fn from_entity(token: RefreshToken, now: DateTime) -> Self {
        let is_active = token.is_active(now);
        let is_expired = token.is_expired(now);

        Self {
            token: token.token,
            expires: format_datetime(&token.expires),
            created: format_datetime(&token.created),
            revoked: token.revoked.as_ref().map(format_datetime),
            replaced_by_token: token.replaced_by_token,
            is_active,
            is_expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_view_hides_owner_and_storage_id() {
        let mut token = RefreshToken::issue(ObjectId::new(), 7, DateTime::now());
        token.id = Some(ObjectId::new());

        let json = serde_json::to_value(RefreshTokenResponse::from_entity(token, DateTime::now())).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("user"));
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("id"));
        assert_eq!(json["is_active"], true);
        assert_eq!(json["is_expired"], false);
    }

    #[test]
    fn test_view_of_superseded_token() {
        let now = DateTime::now();
        let mut token = RefreshToken::issue(ObjectId::new(), 7, now);
        token.revoked = Some(now);
        token.replaced_by_token = Some("next".to_string());

        let view = RefreshTokenResponse::from_entity(token, now);
        assert!(!view.is_active);
        assert!(!view.is_expired);
        assert!(view.revoked.is_some());
        assert_eq!(view.replaced_by_token.as_deref(), Some("next"));
    }
}
