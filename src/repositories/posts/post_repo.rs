//! # 게시글 리포지토리 구현

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::posts::Post;
use crate::errors::errors::{AppError, AppResult};

pub const POST_COLLECTION: &str = "posts";

pub struct PostRepository {
    db: Arc<Database>,
}

impl PostRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.collection::<Post>(POST_COLLECTION)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Post>> {
        let options = FindOptions::builder()
            .sort(doc! { "date": -1 })
            .build();

        self.collection()
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_page(&self, skip: u64, page_size: u64) -> AppResult<(Vec<Post>, u64)> {
        let total = self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = FindOptions::builder()
            .sort(doc! { "date": -1 })
            .skip(skip)
            .limit(page_size as i64)
            .build();

        let items = self.collection()
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((items, total))
    }

    pub async fn insert(&self, mut post: Post) -> AppResult<Post> {
        let result = self.collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    pub async fn save(&self, post: &Post) -> AppResult<()> {
        let id = post
            .id
            .ok_or_else(|| AppError::InternalError("Post has no id".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1 })
            .options(IndexOptions::builder()
                .name("date_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_index(date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
