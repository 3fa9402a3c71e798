//! 여행 정보 DTO 모듈
//!
//! TourAPI 프록시의 요청 쿼리와 정규화된 응답 모델을 정의합니다.

use serde::{Deserialize, Serialize};

/// 키워드 검색 요청 쿼리
#[derive(Debug, Deserialize)]
pub struct TravelSearchQuery {
    /// 검색 키워드
    pub keyword: String,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

/// 지역 기반 목록 요청 쿼리
#[derive(Debug, Deserialize)]
pub struct TravelAreaQuery {
    /// TourAPI 지역 코드 (예: 1=서울, 39=제주)
    pub area_code: String,
    /// 관광 타입 ID (선택, 예: 12=관광지, 39=음식점)
    #[serde(default)]
    pub content_type_id: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

/// TourAPI 항목의 정규화된 표현
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TravelItem {
    /// TourAPI 콘텐츠 ID
    pub content_id: String,
    /// 장소/행사 이름
    pub title: String,
    /// 주소
    pub address: Option<String>,
    /// 대표 이미지 URL
    pub image_url: Option<String>,
    /// 위도
    pub latitude: Option<String>,
    /// 경도
    pub longitude: Option<String>,
    /// 전화번호
    pub tel: Option<String>,
}

/// 여행 정보 목록 응답
///
/// 업스트림 오류 시에도 이 형태의 빈 응답으로 정상 응답합니다.
#[derive(Debug, Serialize)]
pub struct TravelPageResponse {
    pub items: Vec<TravelItem>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl TravelPageResponse {
    pub fn empty(page: u64, size: u64) -> Self {
        Self {
            items: Vec::new(),
            page,
            size,
            total: 0,
        }
    }
}
