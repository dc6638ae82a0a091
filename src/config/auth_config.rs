//! # Authentication Configuration Module
//!
//! JWT 액세스 토큰, 리프레시 토큰, 비밀번호 해싱 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 토큰 정책
//!
//! | 토큰 | 형식 | 유효 기간 | 저장 |
//! |------|------|-----------|------|
//! | 액세스 토큰 | HS256 JWT | 60초 ~ 1시간 (환경별) | 저장하지 않음 |
//! | 리프레시 토큰 | 불투명 랜덤 문자열 | 7일 | MongoDB `refresh_tokens` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_SECONDS="900"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthSettings, JwtConfig};
//!
//! let settings = AuthSettings::from_env();
//! let token_service = TokenService::new(&settings);
//! ```

use std::env;

use super::data_config::{Environment, PasswordConfig};

/// 액세스 토큰 유효 기간의 하한 (초)
pub const MIN_ACCESS_TOKEN_SECONDS: i64 = 60;
/// 액세스 토큰 유효 기간의 상한 (초)
pub const MAX_ACCESS_TOKEN_SECONDS: i64 = 3600;
/// 리프레시 토큰 기본 유효 기간 (일)
pub const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;
/// 리프레시 토큰 유효 기간의 상한 (일)
pub const MAX_REFRESH_TOKEN_DAYS: i64 = 365;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 키와 만료 시간을 환경 변수에서 읽어옵니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰의 유효 기간을 초 단위로 반환합니다.
    ///
    /// `JWT_ACCESS_EXPIRATION_SECONDS`가 설정되어 있으면 해당 값을
    /// 60~3600초 범위로 보정하여 사용합니다.
    pub fn access_expiration_seconds() -> i64 {
        match env::var("JWT_ACCESS_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
        {
            Some(seconds) => clamp_access_seconds(seconds),
            None => Self::access_expiration_for_env(&Environment::current()),
        }
    }

    pub fn access_expiration_for_env(env: &Environment) -> i64 {
        match env {
            Environment::Development => 3600,
            Environment::Test => 60,
            Environment::Staging => 900,
            Environment::Production => 900,
        }
    }

    /// 리프레시 토큰의 유효 기간을 일 단위로 반환합니다.
    ///
    /// 1~365일 범위를 벗어나거나 숫자가 아니면 기본값 7일을 사용합니다.
    pub fn refresh_expiration_days() -> i64 {
        match env::var("JWT_REFRESH_EXPIRATION_DAYS") {
            Ok(raw) => parse_refresh_days(&raw),
            Err(_) => DEFAULT_REFRESH_TOKEN_DAYS,
        }
    }
}

fn clamp_access_seconds(seconds: i64) -> i64 {
    seconds.clamp(MIN_ACCESS_TOKEN_SECONDS, MAX_ACCESS_TOKEN_SECONDS)
}

fn parse_refresh_days(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(days) if (1..=MAX_REFRESH_TOKEN_DAYS).contains(&days) => days,
        _ => {
            log::warn!(
                "JWT_REFRESH_EXPIRATION_DAYS={} is invalid, using {} days",
                raw,
                DEFAULT_REFRESH_TOKEN_DAYS
            );
            DEFAULT_REFRESH_TOKEN_DAYS
        }
    }
}

/// 인증 서비스에 주입되는 설정 값 묶음
///
/// 전역 상태를 읽는 대신 서비스 생성 시 명시적으로 전달합니다.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub access_token_seconds: i64,
    pub refresh_token_days: i64,
    pub bcrypt_cost: u32,
}

impl AuthSettings {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: JwtConfig::secret(),
            access_token_seconds: JwtConfig::access_expiration_seconds(),
            refresh_token_days: JwtConfig::refresh_expiration_days(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        }
    }
}

#[cfg(test)]
impl AuthSettings {
    /// 테스트용 설정 (가장 낮은 bcrypt cost)
    pub fn for_tests() -> Self {
        Self {
            jwt_secret: "test-secret".to_string(),
            access_token_seconds: 3600,
            refresh_token_days: 7,
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(&Environment::Test),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_seconds_are_clamped() {
        assert_eq!(clamp_access_seconds(5), 60);
        assert_eq!(clamp_access_seconds(900), 900);
        assert_eq!(clamp_access_seconds(86_400), 3600);
    }

    #[test]
    fn test_refresh_days_fall_back_outside_window() {
        assert_eq!(parse_refresh_days("30"), 30);
        assert_eq!(parse_refresh_days(" 365 "), 365);
        assert_eq!(parse_refresh_days("0"), DEFAULT_REFRESH_TOKEN_DAYS);
        assert_eq!(parse_refresh_days("-1"), DEFAULT_REFRESH_TOKEN_DAYS);
        assert_eq!(parse_refresh_days("200000000000"), DEFAULT_REFRESH_TOKEN_DAYS);
        assert_eq!(parse_refresh_days("week"), DEFAULT_REFRESH_TOKEN_DAYS);
    }

    #[test]
    fn test_access_expiration_for_each_environment_within_window() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ] {
            let seconds = JwtConfig::access_expiration_for_env(&env);
            assert!((MIN_ACCESS_TOKEN_SECONDS..=MAX_ACCESS_TOKEN_SECONDS).contains(&seconds));
        }
    }
}
