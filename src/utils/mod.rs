//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, ID 파싱, URL 정규화 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{parse_object_id, gravatar_url};
//!
//! let user_id = parse_object_id(&path, "user id")?;
//! let avatar = gravatar_url("alice@example.com");
//! ```

pub mod string_utils;
