//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting 설정
//! - [`auth_config`] - JWT, 리프레시 토큰, 인증 서비스 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_network_dev"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_EXPIRATION_SECONDS="900"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConfigurationProperties` | [`AuthSettings`] |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
