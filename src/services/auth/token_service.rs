//! JWT 액세스 토큰 서비스 구현
//!
//! HS256 서명 액세스 토큰의 발급과 검증을 담당합니다.
//! 리프레시 토큰은 JWT가 아닌 불투명 문자열이며 [`AuthService`]가 관리합니다.
//!
//! 검증 실패는 두 가지로만 구분됩니다.
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 서명은 맞지만 만료됨 | `AppError::TokenExpired` |
//! | 형식 오류, 서명 불일치, 기타 | `AppError::TokenInvalid` |
//!
//! [`AuthService`]: super::auth_service::AuthService

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use mongodb::bson::oid::ObjectId;

use crate::config::AuthSettings;
use crate::domain::models::token::AccessClaims;
use crate::errors::errors::{AppError, AppResult};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_seconds: i64,
}

impl TokenService {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
            access_token_seconds: settings.access_token_seconds,
        }
    }

    pub fn access_token_seconds(&self) -> i64 {
        self.access_token_seconds
    }

    pub fn generate_access_token(&self, user_id: &ObjectId) -> AppResult<String> {
        self.generate_access_token_at(user_id, Utc::now().timestamp())
    }

    /// 지정한 발급 시각(UNIX 초)을 기준으로 토큰을 만듭니다.
    pub fn generate_access_token_at(&self, user_id: &ObjectId, issued_at: i64) -> AppResult<String> {
        let claims = AccessClaims {
            sub: user_id.to_hex(),
            iat: issued_at,
            exp: issued_at + self.access_token_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => {
                    log::debug!("액세스 토큰 검증 실패: {}", e);
                    AppError::TokenInvalid
                }
            })
    }

    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&AuthSettings::for_tests())
    }

    #[test]
    fn test_generated_token_verifies_immediately() {
        let service = service();
        let user_id = ObjectId::new();

        let token = service.generate_access_token(&user_id).unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_hex());
        assert_eq!(claims.exp - claims.iat, service.access_token_seconds());
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let service = service();
        let two_hours_ago = Utc::now().timestamp() - 7200;

        let token = service
            .generate_access_token_at(&ObjectId::new(), two_hours_ago)
            .unwrap();

        assert!(matches!(
            service.verify_access_token(&token),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_foreign_signature_is_invalid() {
        let mut other_settings = AuthSettings::for_tests();
        other_settings.jwt_secret = "another-secret".to_string();
        let other = TokenService::new(&other_settings);

        let token = other.generate_access_token(&ObjectId::new()).unwrap();

        assert!(matches!(
            service().verify_access_token(&token),
            Err(AppError::TokenInvalid)
        ));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        assert!(matches!(
            service().verify_access_token("not.a.jwt"),
            Err(AppError::TokenInvalid)
        ));
        assert!(matches!(
            service().verify_access_token(""),
            Err(AppError::TokenInvalid)
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(TokenService::extract_bearer_token("Basic abc"), None);
        assert_eq!(TokenService::extract_bearer_token("Bearer "), None);
    }
}
