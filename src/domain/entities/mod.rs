//! # 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 그대로 저장되는 문서 타입들입니다.
//! 관계/권한 규칙은 엔티티의 순수 메서드로 구현되어 있습니다.

pub mod users;
pub mod tokens;
pub mod profiles;
pub mod posts;
pub mod groups;
pub mod conversations;
