//! Access Guard
//!
//! 보호된 요청의 헤더에서 액세스 토큰을 꺼내 검증합니다.
//! `Authorization: Bearer <jwt>`를 우선 사용하고, 없으면 `x-auth-token` 헤더를 봅니다.
//!
//! 토큰이 아예 없는 경우도 `TokenInvalid`로 처리합니다.

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use mongodb::bson::oid::ObjectId;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::TokenService;

pub const ACCESS_TOKEN_HEADER: &str = "x-auth-token";

pub fn extract_access_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token);

    bearer.or_else(|| {
        headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    })
}

pub fn authenticate(headers: &HeaderMap, token_service: &TokenService) -> AppResult<AuthenticatedUser> {
    let token = extract_access_token(headers).ok_or(AppError::TokenInvalid)?;
    let claims = token_service.verify_access_token(token)?;
    let user_id = ObjectId::parse_str(&claims.sub).map_err(|_| AppError::TokenInvalid)?;

    Ok(AuthenticatedUser::new(user_id))
}
