//! 인증 핸들러
//!
//! 로그인, 현재 사용자 조회, 리프레시 토큰 회전/폐기/목록을 제공합니다.
//! 회원가입은 `POST /api/v1/users`에 있습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::tokens::{RefreshTokenRequest, RevokeTokenRequest};
use crate::domain::dto::users::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;

#[post("")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let pair = auth_service.login(&payload).await?;
    Ok(HttpResponse::Ok().json(pair))
}

#[get("")]
pub async fn current_user(
    auth_service: web::Data<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let me = auth_service.current_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(me))
}

/// 리프레시 토큰을 새 토큰 쌍으로 교환합니다. 기존 토큰은 폐기됩니다.
#[post("/refresh-token")]
pub async fn refresh_token(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let pair = auth_service.refresh(&payload.refresh_token).await?;
    Ok(HttpResponse::Ok().json(pair))
}

#[post("/revoke-token")]
pub async fn revoke_token(
    auth_service: web::Data<AuthService>,
    user: AuthenticatedUser,
    payload: web::Json<RevokeTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    auth_service.revoke(&payload.token, &user.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/refresh-tokens")]
pub async fn list_refresh_tokens(
    auth_service: web::Data<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let tokens = auth_service.list_tokens(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(tokens))
}
