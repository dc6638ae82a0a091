//! 페이지 단위 목록 응답

use serde::{Deserialize, Serialize};

use crate::errors::errors::{AppError, AppResult};

/// 한 페이지에 담기는 기본 항목 수
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Pagination<T> {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(total: u64, page: u64, page_size: u64, items: Vec<T>) -> Self {
        Self {
            total,
            page,
            page_size,
            items,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Pagination<U> {
        Pagination {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// 1부터 시작하는 페이지 번호를 건너뛸 문서 수로 바꿉니다.
///
/// 0이거나 `u64` 범위를 넘는 페이지는 검증 오류입니다.
pub fn page_offset(page: u64, page_size: u64) -> AppResult<u64> {
    if page < 1 {
        return Err(AppError::ValidationError("Page must be 1 or greater".to_string()));
    }
    (page - 1)
        .checked_mul(page_size)
        .ok_or_else(|| AppError::ValidationError("Page is out of range".to_string()))
}

/// `?keyword=` 검색어
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, DEFAULT_PAGE_SIZE).unwrap(), 0);
        assert_eq!(page_offset(3, DEFAULT_PAGE_SIZE).unwrap(), 20);
    }

    #[test]
    fn test_page_offset_rejects_zero_and_huge_pages() {
        assert!(matches!(
            page_offset(0, DEFAULT_PAGE_SIZE),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            page_offset(u64::MAX, DEFAULT_PAGE_SIZE),
            Err(AppError::ValidationError(_))
        ));
    }
}
