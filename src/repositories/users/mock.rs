//! 테스트용 메모리 사용자 저장소

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_store::UserStore;

#[derive(Default)]
pub struct MockUserStore {
    users: Mutex<HashMap<ObjectId, User>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());
        Ok(user)
    }
}
