//! 리프레시 토큰 저장소 인터페이스
//!
//! 토큰 회전 서비스는 이 trait에만 의존하므로, 운영에서는 MongoDB 구현을,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! 토큰은 물리적으로 삭제하지 않습니다. 상태 변경은 모두 조건부 폐기로만 일어납니다.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::tokens::RefreshToken;
use crate::errors::errors::AppResult;

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 새 토큰을 저장합니다.
    async fn insert(&self, token: &RefreshToken) -> AppResult<()>;

    /// 토큰 문자열로 레코드를 찾습니다.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    /// 토큰이 아직 폐기되지 않았고 `now` 기준으로 만료 전일 때만
    /// `revoked = now`, `replaced_by_token = replaced_by`를 한 번의 원자적 쓰기로 기록합니다.
    ///
    /// 실제로 갱신되었으면 `true`, 조건이 맞지 않아 아무것도 바뀌지 않았으면 `false`.
    async fn revoke_if_active(
        &self,
        token: &str,
        now: DateTime,
        replaced_by: Option<&str>,
    ) -> AppResult<bool>;

    /// 사용자의 모든 토큰을 최신순으로 반환합니다.
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Vec<RefreshToken>>;
}
