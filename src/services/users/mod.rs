//! 사용자 관리 서비스 모듈
//!
//! 조회, 페이지 검색, 본인 정보 수정과 탈퇴를 제공합니다.
//! 수정/삭제는 항상 인증된 사용자 본인에게만 허용됩니다.

pub mod user_service;

pub use user_service::UserService;
