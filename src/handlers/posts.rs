//! 게시글 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::posts::{CreateCommentRequest, PostTextRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::posts::PostService;

#[post("")]
pub async fn create_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    payload: web::Json<PostTextRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let post = service.create_post(&user.user_id, &payload.text).await?;
    Ok(HttpResponse::Created().json(post))
}

#[get("")]
pub async fn list_posts(service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_posts().await?))
}

#[get("/paging/{page}")]
pub async fn paginate_posts(
    service: web::Data<PostService>,
    page: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.paginate_posts(page.into_inner()).await?))
}

#[get("/{post_id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_post(&post_id).await?))
}

#[put("/{post_id}")]
pub async fn update_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<PostTextRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    Ok(HttpResponse::Ok().json(service.update_post(&user.user_id, &post_id, &payload.text).await?))
}

#[delete("/{post_id}")]
pub async fn delete_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_post(&user.user_id, &post_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Post removed" })))
}

#[put("/like/{post_id}")]
pub async fn like_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.like(&user.user_id, &post_id).await?))
}

#[put("/unlike/{post_id}")]
pub async fn unlike_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.unlike(&user.user_id, &post_id).await?))
}

#[put("/share/{post_id}")]
pub async fn share_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.share(&user.user_id, &post_id).await?))
}

#[put("/unshare/{post_id}")]
pub async fn unshare_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.unshare(&user.user_id, &post_id).await?))
}

#[post("/comment/{post_id}")]
pub async fn add_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let comment = service.add_comment(&user.user_id, &post_id, &payload.text).await?;
    Ok(HttpResponse::Created().json(comment))
}

#[delete("/comment/{post_id}/{comment_id}")]
pub async fn remove_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(service.remove_comment(&user.user_id, &post_id, &comment_id).await?))
}
