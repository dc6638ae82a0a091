//! 대화 핸들러
//!
//! 스코프 전체가 `AuthMiddleware::required()`로 보호됩니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::conversations::SendMessageRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::conversations::ConversationService;

#[post("")]
pub async fn send_message(
    service: web::Data<ConversationService>,
    user: AuthenticatedUser,
    payload: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let conversation = service.send_message(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(conversation))
}

#[get("")]
pub async fn my_conversations(
    service: web::Data<ConversationService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_mine(&user.user_id).await?))
}

#[get("/{conversation_id}")]
pub async fn get_conversation(
    service: web::Data<ConversationService>,
    user: AuthenticatedUser,
    conversation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_conversation(&user.user_id, &conversation_id).await?))
}
