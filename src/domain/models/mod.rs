//! 저장되지 않는 인증 관련 모델

pub mod auth;
pub mod token;
