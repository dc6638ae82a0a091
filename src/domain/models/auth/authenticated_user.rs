//! 인증된 사용자 컨텍스트
//!
//! 액세스 토큰 검증에 성공한 요청의 사용자 식별자입니다.
//! 전역 상태 대신 핸들러 인자로 명시적으로 전달됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_post(
//!     user: AuthenticatedUser,
//!     payload: web::Json<CreatePostRequest>,
//! ) -> Result<HttpResponse, AppError> { ... }
//! ```

use std::future::{ready, Ready};

use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::errors::errors::AppError;
use crate::services::auth::{access_guard, TokenService};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
}

impl AuthenticatedUser {
    pub fn new(user_id: ObjectId) -> Self {
        Self { user_id }
    }

    pub fn id_string(&self) -> String {
        self.user_id.to_hex()
    }
}

/// 미들웨어가 이미 저장한 사용자가 있으면 재사용하고,
/// 없으면 요청 헤더에서 직접 액세스 토큰을 검증합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<AuthenticatedUser>() {
            return ready(Ok(user.clone()));
        }

        let result = match req.app_data::<web::Data<TokenService>>() {
            Some(token_service) => access_guard::authenticate(req.headers(), token_service.get_ref()),
            None => Err(AppError::InternalError("TokenService is not registered".to_string())),
        };

        ready(result.map_err(|e| {
            log::warn!("인증 실패: {}", e);
            Error::from(e)
        }))
    }
}
