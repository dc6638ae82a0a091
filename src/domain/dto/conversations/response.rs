use serde::Serialize;

use crate::domain::entities::conversations::{Conversation, Message};
use crate::utils::string_utils::format_datetime;

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub from: String,
    pub to: String,
    pub read: bool,
    pub text: String,
    pub date: String,
}

impl From<&Message> for MessageResponse {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.to_hex(),
            from: m.from.to_hex(),
            to: m.to.to_hex(),
            read: m.read,
            text: m.text.clone(),
            date: format_datetime(&m.date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub user1: String,
    pub user2: String,
    pub date: String,
    pub recent_date: String,
    pub messages: Vec<MessageResponse>,
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id.map(|id| id.to_hex()).unwrap_or_default(),
            user1: c.user1.to_hex(),
            user2: c.user2.to_hex(),
            date: format_datetime(&c.date),
            recent_date: format_datetime(&c.recent_date),
            messages: c.messages.iter().map(MessageResponse::from).collect(),
        }
    }
}
