//! # 대화 서비스
//!
//! 1:1 메시지 전송과 대화방 목록 조회를 담당합니다.
//! 두 사용자 사이에는 대화방이 하나만 유지됩니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::conversations::{ConversationResponse, SendMessageRequest};
use crate::domain::entities::conversations::Conversation;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::conversations::ConversationRepository;
use crate::repositories::users::{UserRepository, UserStore};
use crate::utils::string_utils::{parse_object_id, validate_required_string};

pub struct ConversationService {
    conversation_repo: Arc<ConversationRepository>,
    user_repo: Arc<UserRepository>,
}

impl ConversationService {
    pub fn new(conversation_repo: Arc<ConversationRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            conversation_repo,
            user_repo,
        }
    }

    /// `conversation_id`가 주어지면 호출자와 수신자가 정확히 그 대화방의 두 참여자여야 합니다.
    /// 없으면 두 사람 사이의 기존 대화방을 쓰거나 새로 만듭니다.
    pub async fn send_message(
        &self,
        caller: &ObjectId,
        request: SendMessageRequest,
    ) -> AppResult<ConversationResponse> {
        let to = parse_object_id(&request.to, "recipient id")?;
        if &to == caller {
            return Err(AppError::ValidationError("You cannot send a message to yourself".to_string()));
        }
        let text = validate_required_string(&request.text, "Text")?;

        if self.user_repo.find_by_id(&to).await?.is_none() {
            return Err(AppError::NotFound("Recipient not found".to_string()));
        }

        let mut conversation = match request.conversation_id.as_deref() {
            Some(id) => {
                let id = parse_object_id(id, "conversation id")?;
                let conversation = self
                    .conversation_repo
                    .find_by_id(&id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;
                ensure_participants(&conversation, caller, &to)?;
                conversation
            }
            None => match self.conversation_repo.find_between(caller, &to).await? {
                Some(existing) => existing,
                None => {
                    log::debug!("💬 새 대화방: {} ↔ {}", caller, to);
                    self.conversation_repo
                        .insert(Conversation::between(*caller, to))
                        .await?
                }
            },
        };

        conversation.push_message(*caller, to, text);
        self.conversation_repo.save(&conversation).await?;
        Ok(ConversationResponse::from(conversation))
    }

    pub async fn list_mine(&self, caller: &ObjectId) -> AppResult<Vec<ConversationResponse>> {
        let conversations = self.conversation_repo.find_for_user(caller).await?;
        Ok(conversations.into_iter().map(ConversationResponse::from).collect())
    }

    /// 참여자만 대화 내용을 볼 수 있습니다.
    pub async fn get_conversation(&self, caller: &ObjectId, id: &str) -> AppResult<ConversationResponse> {
        let id = parse_object_id(id, "conversation id")?;
        let conversation = self
            .conversation_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

        if !conversation.involves(caller) {
            return Err(AppError::AuthorizationError("User not authorized".to_string()));
        }
        Ok(ConversationResponse::from(conversation))
    }
}

fn ensure_participants(conversation: &Conversation, caller: &ObjectId, to: &ObjectId) -> AppResult<()> {
    if !conversation.is_between(caller, to) {
        return Err(AppError::AuthorizationError(
            "Sender and recipient must be the participants of this conversation".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_conversation_requires_both_participants() {
        let (a, b, c) = (ObjectId::new(), ObjectId::new(), ObjectId::new());
        let conversation = Conversation::between(a, b);

        assert!(ensure_participants(&conversation, &b, &a).is_ok());
        assert!(matches!(
            ensure_participants(&conversation, &a, &c),
            Err(AppError::AuthorizationError(_))
        ));
        assert!(ensure_participants(&conversation, &c, &b).is_err());
    }
}
