//! # 대화방 리포지토리 구현

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::conversations::Conversation;
use crate::errors::errors::{AppError, AppResult};

pub const CONVERSATION_COLLECTION: &str = "conversations";

pub struct ConversationRepository {
    db: Arc<Database>,
}

impl ConversationRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Conversation> {
        self.db.collection::<Conversation>(CONVERSATION_COLLECTION)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Conversation>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 두 사용자 사이의 대화방을 찾습니다. (참여자 순서 무관)
    pub async fn find_between(&self, a: &ObjectId, b: &ObjectId) -> AppResult<Option<Conversation>> {
        self.collection()
            .find_one(doc! {
                "$or": [
                    { "user1": a, "user2": b },
                    { "user1": b, "user2": a },
                ]
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자가 참여한 대화방을 최근 메시지 순으로 반환합니다.
    pub async fn find_for_user(&self, user: &ObjectId) -> AppResult<Vec<Conversation>> {
        let options = FindOptions::builder()
            .sort(doc! { "recent_date": -1 })
            .build();

        self.collection()
            .find(doc! { "$or": [ { "user1": user }, { "user2": user } ] })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn insert(&self, mut conversation: Conversation) -> AppResult<Conversation> {
        let result = self.collection()
            .insert_one(&conversation)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        conversation.id = result.inserted_id.as_object_id();
        Ok(conversation)
    }

    pub async fn save(&self, conversation: &Conversation) -> AppResult<()> {
        let id = conversation
            .id
            .ok_or_else(|| AppError::InternalError("Conversation has no id".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, conversation)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let participants_index = IndexModel::builder()
            .keys(doc! { "user1": 1, "user2": 1 })
            .options(IndexOptions::builder()
                .name("participants".to_string())
                .build())
            .build();

        let recent_index = IndexModel::builder()
            .keys(doc! { "recent_date": -1 })
            .options(IndexOptions::builder()
                .name("recent_date_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([participants_index, recent_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
