//! # 프로필 리포지토리 구현
//!
//! `profiles` 컬렉션. 사용자당 하나의 문서만 허용합니다 (`user` 유니크 인덱스).

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::profiles::Profile;
use crate::errors::errors::{AppError, AppResult};

pub const PROFILE_COLLECTION: &str = "profiles";

pub struct ProfileRepository {
    db: Arc<Database>,
}

impl ProfileRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Profile> {
        self.db.collection::<Profile>(PROFILE_COLLECTION)
    }

    pub async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>> {
        self.collection()
            .find_one(doc! { "user": user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Profile>> {
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

    /// 사용자 기준으로 문서를 통째로 저장합니다. 없으면 새로 만듭니다.
    pub async fn save(&self, profile: &Profile) -> AppResult<()> {
        self.collection()
            .replace_one(doc! { "user": profile.user }, profile)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    pub async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "user": user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
