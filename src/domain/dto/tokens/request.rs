use serde::Deserialize;
use validator::Validate;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// 토큰 폐기 요청 DTO
///
/// 호출자는 액세스 토큰으로 인증되어 있어야 하며, 자신의 토큰만 폐기할 수 있습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RevokeTokenRequest {
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}
