//! 미들웨어 모듈
//!
//! 요청 파이프라인의 횡단 관심사를 처리합니다. 현재는 액세스 토큰 인증만 있습니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/api/v1/conversations")
//!             .wrap(AuthMiddleware::required())
//!             .service(send_message)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
