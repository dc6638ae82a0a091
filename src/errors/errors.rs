//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 소셜 네트워크 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! HTTP 상태 코드와 기계가 읽을 수 있는 에러 코드로 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "token_expired", "message": "Token is expired" }
//! ```
//!
//! 5xx 계열 에러는 내부 상세 내용을 로그로만 남기고,
//! 클라이언트에는 일반화된 메시지만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn find_post(id: &str) -> Result<Post, AppError> {
//!     let post = post_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
//!     Ok(post)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 `Result<HttpResponse, AppError>`로 반환하면
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 이메일은 존재하지만 비밀번호가 일치하지 않음 (401)
    #[error("Credential is not valid")]
    InvalidCredentials,

    /// 리프레시 토큰이 없거나, 폐기되었거나, 만료됨 (401)
    ///
    /// 어떤 경우인지는 외부에 드러내지 않습니다.
    #[error("Invalid token")]
    InvalidToken,

    /// 액세스 토큰 서명은 유효하지만 유효 기간이 지남 (401)
    #[error("Token is expired")]
    TokenExpired,

    /// 액세스 토큰이 없거나, 형식이 잘못되었거나, 서명이 맞지 않음 (401)
    #[error("Token is not valid")]
    TokenInvalid,

    /// 소유권 또는 역할 부족 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기 처리에 사용하는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidToken => "invalid_refresh_token",
            AppError::TokenExpired => "token_expired",
            AppError::TokenInvalid => "token_invalid",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에 노출해도 되는 메시지
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials
            | AppError::InvalidToken
            | AppError::TokenExpired
            | AppError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 서버 에러: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.code(),
            "message": self.public_message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_token_errors_are_unauthorized_with_distinct_codes() {
        assert_eq!(AppError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_ne!(AppError::TokenExpired.code(), AppError::TokenInvalid.code());
        assert_eq!(AppError::TokenExpired.code(), "token_expired");
        assert_eq!(AppError::TokenInvalid.code(), "token_invalid");
    }

    #[test]
    fn test_authorization_error_is_forbidden() {
        let error = AppError::AuthorizationError("not the owner".to_string());
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_conflict_body_carries_message() {
        let response = AppError::ConflictError("User already exists".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "conflict");
        assert_eq!(json["message"], "User already exists");
    }

    #[test]
    fn test_error_context_wraps_into_internal_error() {
        let result: Result<(), &str> = Err("boom");
        match result.context("hashing failed") {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "hashing failed: boom"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
