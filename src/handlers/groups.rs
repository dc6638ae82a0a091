//! 그룹 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::groups::{AddManagerRequest, GroupRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::groups::GroupService;

#[post("")]
pub async fn create_group(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    payload: web::Json<GroupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let group = service.create_group(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(group))
}

#[get("")]
pub async fn list_groups(service: web::Data<GroupService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_groups().await?))
}

#[get("/{group_id}")]
pub async fn get_group(
    service: web::Data<GroupService>,
    group_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_group(&group_id).await?))
}

#[put("/{group_id}")]
pub async fn update_group(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    group_id: web::Path<String>,
    payload: web::Json<GroupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    Ok(HttpResponse::Ok().json(
        service
            .update_group(&user.user_id, &group_id, payload.into_inner())
            .await?,
    ))
}

#[delete("/{group_id}")]
pub async fn delete_group(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    group_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_group(&user.user_id, &group_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Group removed" })))
}

#[put("/{group_id}/join")]
pub async fn join_group(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    group_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.request_join(&user.user_id, &group_id).await?))
}

#[put("/{group_id}/approve/{user_id}")]
pub async fn approve_join_request(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, user_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(service.approve_request(&user.user_id, &group_id, &user_id).await?))
}

#[get("/{group_id}/members")]
pub async fn list_members(
    service: web::Data<GroupService>,
    group_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_members(&group_id).await?))
}

#[delete("/{group_id}/members/{user_id}")]
pub async fn remove_member(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, user_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(service.remove_member(&user.user_id, &group_id, &user_id).await?))
}

#[post("/{group_id}/managers")]
pub async fn add_manager(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    group_id: web::Path<String>,
    payload: web::Json<AddManagerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    Ok(HttpResponse::Ok().json(
        service
            .add_manager(&user.user_id, &group_id, payload.into_inner())
            .await?,
    ))
}

#[delete("/{group_id}/managers/{user_id}")]
pub async fn remove_manager(
    service: web::Data<GroupService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, user_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(service.remove_manager(&user.user_id, &group_id, &user_id).await?))
}
