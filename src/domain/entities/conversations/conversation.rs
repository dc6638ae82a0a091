//! Conversation Entity Implementation
//!
//! 두 사용자 사이의 1:1 대화방입니다. 메시지는 최신순으로 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user1: ObjectId,
    pub user2: ObjectId,
    pub date: DateTime,
    pub recent_date: DateTime,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub from: ObjectId,
    pub to: ObjectId,
    #[serde(default)]
    pub read: bool,
    pub text: String,
    pub date: DateTime,
    #[serde(default = "default_true")]
    pub show_on_from: bool,
    #[serde(default = "default_true")]
    pub show_on_to: bool,
}

fn default_true() -> bool {
    true
}

impl Conversation {
    pub fn between(user1: ObjectId, user2: ObjectId) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            user1,
            user2,
            date: now,
            recent_date: now,
            messages: Vec::new(),
        }
    }

    pub fn involves(&self, user: &ObjectId) -> bool {
        &self.user1 == user || &self.user2 == user
    }

    /// 두 사용자가 정확히 이 대화방의 참여자인지 확인합니다. (순서 무관)
    pub fn is_between(&self, a: &ObjectId, b: &ObjectId) -> bool {
        (&self.user1 == a && &self.user2 == b) || (&self.user1 == b && &self.user2 == a)
    }

    pub fn push_message(&mut self, from: ObjectId, to: ObjectId, text: String) -> &Message {
        let now = DateTime::now();
        self.messages.insert(
            0,
            Message {
                id: ObjectId::new(),
                from,
                to,
                read: false,
                text,
                date: now,
                show_on_from: true,
                show_on_to: true,
            },
        );
        self.recent_date = now;
        &self.messages[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_between_ignores_order() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let conversation = Conversation::between(a, b);

        assert!(conversation.is_between(&a, &b));
        assert!(conversation.is_between(&b, &a));
        assert!(!conversation.is_between(&a, &ObjectId::new()));
        assert!(conversation.involves(&b));
    }

    #[test]
    fn test_push_message_is_newest_first_and_bumps_recent_date() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let mut conversation = Conversation::between(a, b);
        let created = conversation.recent_date;

        conversation.push_message(a, b, "hi".to_string());
        conversation.push_message(b, a, "hello".to_string());

        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[0].text, "hello");
        assert!(!conversation.messages[0].read);
        assert!(conversation.recent_date >= created);
    }
}
