//! # 인증 서비스 모듈
//!
//! ```text
//! auth/
//! ├── credential_verifier.rs  # 이메일/비밀번호 검증 (bcrypt)
//! ├── token_service.rs        # HS256 액세스 토큰 발급/검증
//! ├── access_guard.rs         # 요청 헤더 → AuthenticatedUser
//! └── auth_service.rs         # 로그인, 회원가입, 리프레시 토큰 회전/폐기
//! ```

pub mod access_guard;
pub mod auth_service;
pub mod credential_verifier;
pub mod token_service;

pub use auth_service::AuthService;
pub use credential_verifier::CredentialVerifier;
pub use token_service::TokenService;
