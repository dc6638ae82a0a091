//! # 리프레시 토큰 리포지토리 구현
//!
//! `refresh_tokens` 컬렉션에 대한 MongoDB 구현입니다.
//!
//! ## 인덱스
//!
//! - `token` 유니크 인덱스: 문자열 조회와 중복 방지
//! - `user` + `created` 인덱스: 사용자별 토큰 목록

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::tokens::token_store::RefreshTokenStore;

pub const REFRESH_TOKEN_COLLECTION: &str = "refresh_tokens";

pub struct RefreshTokenRepository {
    db: Arc<Database>,
}

impl RefreshTokenRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<RefreshToken> {
        self.db.collection::<RefreshToken>(REFRESH_TOKEN_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1, "created": -1 })
            .options(IndexOptions::builder()
                .name("user_created_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([token_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn insert(&self, token: &RefreshToken) -> AppResult<()> {
        self.collection()
            .insert_one(token)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        self.collection()
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn revoke_if_active(
        &self,
        token: &str,
        now: DateTime,
        replaced_by: Option<&str>,
    ) -> AppResult<bool> {
        // revoked: null 은 필드가 없는 문서도 매칭
        let filter = doc! {
            "token": token,
            "revoked": null,
            "expires": { "$gt": now },
        };

        let mut set = doc! { "revoked": now };
        if let Some(replacement) = replaced_by {
            set.insert("replaced_by_token", replacement);
        }

        let result = self.collection()
            .update_one(filter, doc! { "$set": set })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count == 1)
    }

    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Vec<RefreshToken>> {
        let options = FindOptions::builder()
            .sort(doc! { "created": -1 })
            .build();

        let cursor = self.collection()
            .find(doc! { "user": user })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
