//! # 그룹 리포지토리 구현
//!
//! 그룹 이름과 코드는 각각 유니크합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::groups::Group;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::is_duplicate_key;

pub const GROUP_COLLECTION: &str = "groups";

pub struct GroupRepository {
    db: Arc<Database>,
}

fn duplicate_to_conflict(e: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&e) {
        AppError::ConflictError("Group name or code already exists".to_string())
    } else {
        AppError::DatabaseError(e.to_string())
    }
}

impl GroupRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Group> {
        self.db.collection::<Group>(GROUP_COLLECTION)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Group>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Group>> {
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

    /// 같은 이름 또는 코드를 가진 다른 그룹이 있는지 확인합니다.
    pub async fn name_or_code_taken(
        &self,
        name: &str,
        code: &str,
        exclude: Option<&ObjectId>,
    ) -> AppResult<bool> {
        let mut filter = doc! { "$or": [ { "name": name }, { "code": code } ] };
        if let Some(id) = exclude {
            filter.insert("_id", doc! { "$ne": id });
        }

        let count = self.collection()
            .count_documents(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    pub async fn insert(&self, mut group: Group) -> AppResult<Group> {
        let result = self.collection()
            .insert_one(&group)
            .await
            .map_err(duplicate_to_conflict)?;

        group.id = result.inserted_id.as_object_id();
        Ok(group)
    }

    pub async fn save(&self, group: &Group) -> AppResult<()> {
        let id = group
            .id
            .ok_or_else(|| AppError::InternalError("Group has no id".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, group)
            .await
            .map_err(duplicate_to_conflict)?;

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
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("code_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index, code_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
