//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - 인증 흐름(`users`, `tokens`)은 `async_trait` 인터페이스 뒤에 두어 메모리 구현으로 테스트합니다.
//! - 나머지 리소스는 MongoDB 구현체를 직접 사용합니다.

pub mod users;
pub mod tokens;
pub mod profiles;
pub mod posts;
pub mod groups;
pub mod conversations;

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// MongoDB 중복 키(E11000) 에러인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
