//! 테스트용 메모리 리프레시 토큰 저장소

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::tokens::RefreshToken;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::tokens::token_store::RefreshTokenStore;

#[derive(Default)]
pub struct MockRefreshTokenStore {
    tokens: Mutex<HashMap<String, RefreshToken>>,
    fail_inserts: Mutex<bool>,
    fail_rotations: Mutex<bool>,
    lose_next_rotation: Mutex<bool>,
}

impl MockRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후의 insert 호출이 저장소 오류를 내도록 설정합니다.
    pub fn fail_inserts(&self, fail: bool) {
        *self.fail_inserts.lock().unwrap() = fail;
    }

    /// 이후의 회전용 폐기(`replaced_by` 지정) 호출이 저장소 오류를 내도록 설정합니다.
    pub fn fail_rotations(&self, fail: bool) {
        *self.fail_rotations.lock().unwrap() = fail;
    }

    /// 다음 회전용 폐기 직전에 다른 요청이 같은 토큰을 먼저 폐기한 상황을 만듭니다.
    pub fn lose_next_rotation(&self) {
        *self.lose_next_rotation.lock().unwrap() = true;
    }

    /// 주어진 토큰을 제외한 사용자의 토큰 목록
    pub fn others_of(&self, user: &ObjectId, except: &str) -> Vec<RefreshToken> {
        self.tokens
            .lock()
            .unwrap()
            .values()
            .filter(|t| &t.user == user && t.token != except)
            .cloned()
            .collect()
    }

    pub fn get(&self, token: &str) -> Option<RefreshToken> {
        self.tokens.lock().unwrap().get(token).cloned()
    }

    pub fn put(&self, token: RefreshToken) {
        self.tokens.lock().unwrap().insert(token.token.clone(), token);
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn insert(&self, token: &RefreshToken) -> AppResult<()> {
        if *self.fail_inserts.lock().unwrap() {
            return Err(AppError::DatabaseError("insert failed".to_string()));
        }

        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.token) {
            return Err(AppError::DatabaseError("duplicate token".to_string()));
        }

        let mut stored = token.clone();
        stored.id.get_or_insert_with(ObjectId::new);
        tokens.insert(stored.token.clone(), stored);
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        Ok(self.get(token))
    }

    async fn revoke_if_active(
        &self,
        token: &str,
        now: DateTime,
        replaced_by: Option<&str>,
    ) -> AppResult<bool> {
        if replaced_by.is_some() && *self.fail_rotations.lock().unwrap() {
            return Err(AppError::DatabaseError("revoke failed".to_string()));
        }

        let mut tokens = self.tokens.lock().unwrap();
        if replaced_by.is_some() && std::mem::take(&mut *self.lose_next_rotation.lock().unwrap()) {
            if let Some(stored) = tokens.get_mut(token) {
                stored.revoked.get_or_insert(now);
            }
        }

        match tokens.get_mut(token) {
            Some(stored) if stored.is_active(now) => {
                stored.revoked = Some(now);
                stored.replaced_by_token = replaced_by.map(str::to_string);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Vec<RefreshToken>> {
        let mut owned: Vec<RefreshToken> = self
            .tokens
            .lock()
            .unwrap()
            .values()
            .filter(|t| &t.user == user)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(owned)
    }
}
