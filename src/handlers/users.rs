//! 사용자 핸들러
//!
//! 회원가입은 토큰 쌍을 201로 돌려줍니다.
//! 수정/삭제는 경로의 ID가 인증된 사용자 본인일 때만 허용됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::pagination::KeywordQuery;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;
use crate::services::users::UserService;

#[post("")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let pair = auth_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(pair))
}

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/paging/{page}")]
pub async fn paginate_users(
    service: web::Data<UserService>,
    page: web::Path<u64>,
    query: web::Query<KeywordQuery>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .paginate_users(page.into_inner(), query.keyword.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let updated = service
        .update_user(&user.user_id, &user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user.user_id, &user_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "User deleted" })))
}
