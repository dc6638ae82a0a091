//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── auth_request.rs          # 로그인 요청
//! │   ├── create_user_request.rs   # 회원가입 요청
//! │   └── update_user_request.rs   # 내 정보 수정 요청
//! └── response/
//!     └── user_response.rs         # 사용자 정보 응답 (비밀번호 해시 제외)
//! ```
//!
//! ## 실제 API 플로우 예제
//!
//! ```text
//! POST /api/v1/users
//! Content-Type: application/json
//!
//! {
//!   "first_name": "Alice",
//!   "last_name": "Kim",
//!   "email": "alice@example.com",
//!   "password": "secret123"
//! }
//!
//! HTTP/1.1 201 Created
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "refresh_token": "Q2hhbmdlIG1lIHRvIGEgcmFuZG9tIHN0cmluZw...",
//!   "token_type": "Bearer",
//!   "expires_in": 900
//! }
//! ```
//!
//! ## 검증 규칙
//! - **이메일**: RFC 5322 형식
//! - **이름**: 1-50자
//! - **비밀번호**: 최소 6자

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
