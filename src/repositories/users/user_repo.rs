//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션을 사용합니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: 이메일 유니크 인덱스, 중복 키 에러는 `ConflictError`로 변환
//! - **페이지 조회**: 이름/이메일 대소문자 무시 키워드 검색

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::is_duplicate_key;
use crate::repositories::users::user_store::UserStore;

pub const USER_COLLECTION: &str = "users";

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USER_COLLECTION)
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self.collection()
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 키워드 검색 결과의 한 페이지와 전체 건수를 반환합니다.
    pub async fn find_page(
        &self,
        keyword: Option<&str>,
        skip: u64,
        page_size: u64,
    ) -> AppResult<(Vec<User>, u64)> {
        let filter = match keyword.map(str::trim).filter(|k| !k.is_empty()) {
            Some(keyword) => {
                let pattern = regex::escape(keyword);
                doc! {
                    "$or": [
                        { "first_name": { "$regex": &pattern, "$options": "i" } },
                        { "last_name": { "$regex": &pattern, "$options": "i" } },
                        { "email": { "$regex": &pattern, "$options": "i" } },
                    ]
                }
            }
            None => doc! {},
        };

        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(page_size as i64)
            .build();

        let items = self.collection()
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((items, total))
    }

    /// 다른 사용자가 이미 이 이메일을 쓰고 있는지 확인합니다.
    pub async fn email_taken_by_other(&self, email: &str, id: &ObjectId) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "email": email, "_id": { "$ne": id } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    pub async fn update(&self, id: &ObjectId, update_doc: Document) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Email is already in use".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email.trim().to_lowercase() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("User already exists".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }
}
