//! # Domain Layer Module
//!
//! 도메인 계층입니다. 영속 엔티티와 그 규칙, API 경계의 DTO,
//! 인증 관련 모델을 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 도메인 규칙 (팔로우, 좋아요, 그룹 권한 등)
//! ├── dto       - 요청/응답 계약 (validator 검증 포함)
//! └── models    - JWT 클레임, 인증된 사용자 추출기
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! 엔티티 메서드는 저장소를 모릅니다. 상태 전이만 검증하고,
//! 저장은 서비스가 리포지토리를 통해 수행합니다.

pub mod dto;
pub mod entities;
pub mod models;
