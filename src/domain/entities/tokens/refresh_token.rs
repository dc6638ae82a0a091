//! Refresh Token Entity
//!
//! 장기 보관되는 리프레시 토큰 레코드입니다.
//!
//! ## 생명주기
//!
//! ```text
//!  로그인/회원가입          refresh               revoke
//!  ──────────────▶ active ─────────▶ superseded
//!                    │                (revoked + replaced_by_token)
//!                    │ revoke
//!                    ├──────────────▶ revoked (replaced_by_token 없음)
//!                    │ 시간 경과
//!                    └──────────────▶ expired
//! ```
//!
//! 폐기된 토큰은 재사용 탐지와 감사를 위해 삭제하지 않습니다.
//! `is_expired`/`is_active`는 저장하지 않고 조회 시점에 계산합니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use mongodb::bson::{oid::ObjectId, DateTime};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// 리프레시 토큰 생성에 사용하는 랜덤 바이트 수
pub const REFRESH_TOKEN_BYTES: usize = 40;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub token: String,
    pub expires: DateTime,
    pub created: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_token: Option<String>,
}

impl RefreshToken {
    /// 새 토큰을 발급합니다. 만료 시각은 `now + ttl_days`이며,
    /// 표현 범위를 넘으면 최대 시각으로 고정됩니다.
    pub fn issue(user: ObjectId, ttl_days: i64, now: DateTime) -> Self {
        let expires = ttl_days
            .checked_mul(MILLIS_PER_DAY)
            .and_then(|ttl| now.timestamp_millis().checked_add(ttl))
            .unwrap_or(i64::MAX);

        Self {
            id: None,
            user,
            token: generate_token_string(),
            expires: DateTime::from_millis(expires),
            created: now,
            revoked: None,
            replaced_by_token: None,
        }
    }

    pub fn is_expired(&self, now: DateTime) -> bool {
        now >= self.expires
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.is_some()
    }

    /// 폐기되지 않았고 만료 전인 경우에만 사용할 수 있습니다.
    pub fn is_active(&self, now: DateTime) -> bool {
        !self.is_revoked() && !self.is_expired(now)
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }
}

/// 추측 불가능한 불투명 토큰 문자열을 생성합니다.
pub fn generate_token_string() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
