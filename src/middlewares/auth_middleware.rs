//! 인증 미들웨어
//!
//! 스코프 단위로 액세스 토큰을 검사하고, 성공하면 [`AuthenticatedUser`]를
//! request extensions에 저장합니다. 핸들러는 같은 타입을 추출기로 받습니다.
//!
//! | 토큰 없음/무효 | 토큰 유효 |
//! |----------------|-----------|
//! | 401 (`token_expired` / `token_invalid`) | 통과 + 사용자 저장 |
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 액세스 토큰이 없으면 401로 응답합니다.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
