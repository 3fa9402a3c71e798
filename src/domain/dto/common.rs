//! 공통 응답 래퍼와 페이지네이션 DTO

use serde::{Deserialize, Serialize};

/// API 응답 래퍼
///
/// 모든 성공/실패 응답이 이 형태를 따릅니다.
///
/// ```json
/// { "success": true, "data": { ... }, "message": null }
/// { "success": false, "data": null, "message": "사용자를 찾을 수 없습니다" }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// 페이지네이션 요청 쿼리
///
/// `page`는 1부터 시작합니다. 범위를 벗어난 값은 기본값으로 보정됩니다.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    /// 제목/내용 키워드 검색 (게시글 목록에서만 사용)
    #[serde(default)]
    pub keyword: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

impl PageQuery {
    /// 보정된 페이지 번호 (최소 1)
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// 보정된 페이지 크기 (1-100)
    pub fn size(&self) -> u64 {
        self.size.clamp(1, 100)
    }

    /// MongoDB skip 값
    pub fn skip(&self) -> u64 {
        (self.page() - 1) * self.size()
    }
}

/// 페이지네이션된 목록 응답
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    /// 현재 페이지 항목들
    pub items: Vec<T>,
    /// 현재 페이지 번호 (1부터 시작)
    pub page: u64,
    /// 페이지당 항목 수
    pub size: u64,
    /// 전체 항목 수
    pub total: u64,
    /// 전체 페이지 수
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, page: u64, size: u64, total: u64) -> Self {
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
        Self {
            items,
            page,
            size,
            total,
            total_pages,
        }
    }

    /// 빈 페이지 응답
    pub fn empty(page: u64, size: u64) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_clamping() {
        let q = PageQuery {
            page: 0,
            size: 1000,
            keyword: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.size(), 100);
        assert_eq!(q.skip(), 0);

        let q = PageQuery {
            page: 3,
            size: 10,
            keyword: None,
        };
        assert_eq!(q.skip(), 20);
    }

    #[test]
    fn test_page_response_total_pages() {
        let page: PageResponse<u32> = PageResponse::new(vec![1, 2, 3], 1, 10, 25);
        assert_eq!(page.total_pages, 3);

        let empty: PageResponse<u32> = PageResponse::empty(1, 10);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_api_response_shapes() {
        let ok = ApiResponse::success(42);
        assert!(ok.success);
        assert_eq!(ok.data, Some(42));
        assert!(ok.message.is_none());

        let err = ApiResponse::<()>::error("실패");
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.message.as_deref(), Some("실패"));
    }
}
