//! 프로필 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::profiles::{AddEducationRequest, AddExperienceRequest, CreateProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::profiles::ProfileService;

#[get("")]
pub async fn list_profiles(service: web::Data<ProfileService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_profiles().await?))
}

#[get("/me")]
pub async fn my_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_mine(&user.user_id).await?))
}

#[get("/user/{user_id}")]
pub async fn profile_by_user(
    service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_by_user(&user_id).await?))
}

/// 프로필 생성 또는 수정
#[post("")]
pub async fn upsert_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = service.upsert_mine(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[delete("")]
pub async fn delete_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    service.delete_mine(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Profile deleted" })))
}

#[put("/experience")]
pub async fn add_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<AddExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    Ok(HttpResponse::Ok().json(service.add_experience(&user.user_id, payload.into_inner()).await?))
}

#[delete("/experience/{experience_id}")]
pub async fn remove_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    experience_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.remove_experience(&user.user_id, &experience_id).await?))
}

#[put("/education")]
pub async fn add_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<AddEducationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    Ok(HttpResponse::Ok().json(service.add_education(&user.user_id, payload.into_inner()).await?))
}

#[delete("/education/{education_id}")]
pub async fn remove_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    education_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.remove_education(&user.user_id, &education_id).await?))
}

#[put("/follow/{user_id}")]
pub async fn follow(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.follow(&user.user_id, &user_id).await?))
}

#[put("/unfollow/{user_id}")]
pub async fn unfollow(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.unfollow(&user.user_id, &user_id).await?))
}

#[put("/friend/{user_id}")]
pub async fn send_friend_request(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.send_friend_request(&user.user_id, &user_id).await?))
}

#[put("/accept/{user_id}")]
pub async fn accept_friend_request(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.accept_friend_request(&user.user_id, &user_id).await?))
}

#[put("/unfriend/{user_id}")]
pub async fn unfriend(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.unfriend(&user.user_id, &user_id).await?))
}
