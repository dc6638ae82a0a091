//! 인증 흐름에서 사용하는 사용자 저장소 인터페이스

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::User;
use crate::errors::errors::AppResult;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 사용자를 저장하고 `_id`가 채워진 엔티티를 반환합니다.
    ///
    /// 이메일이 이미 존재하면 `ConflictError`.
    async fn create(&self, user: User) -> AppResult<User>;
}
