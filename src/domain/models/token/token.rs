//! 액세스 토큰 클레임 모델

use serde::{Deserialize, Serialize};

/// HS256 액세스 토큰에 담기는 클레임
///
/// `sub`는 사용자 ObjectId의 16진수 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
