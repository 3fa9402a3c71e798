//! # TourAPI 여행 정보 서비스 구현
//!
//! 한국관광공사 TourAPI(KorService)를 호출해 여행지 정보를 조회합니다.
//! 업스트림 응답 형태의 변덕(단건이면 객체, 다건이면 배열, 없으면 빈 문자열)은
//! 이 모듈 안에서 흡수되며, 바깥 계층은 항상 [`TravelPageResponse`]만 받습니다.
//!
//! ## 장애 격리
//!
//! TourAPI 장애가 서비스 전체 장애로 번지지 않도록, 업스트림 호출 실패나
//! 응답 파싱 실패는 에러 대신 빈 페이지로 응답합니다.

use log::warn;
use serde_json::Value;

use crate::{
    config::TourApiConfig,
    domain::dto::travel::{TravelAreaQuery, TravelItem, TravelPageResponse, TravelSearchQuery},
};

/// TourAPI resultCode 정상 값
const RESULT_CODE_OK: &str = "0000";

/// TourAPI 여행 정보 서비스
#[derive(Clone)]
pub struct TravelService {
    http: reqwest::Client,
}

impl TravelService {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// 키워드로 여행지 검색
    ///
    /// 업스트림 실패 시 빈 페이지를 반환합니다.
    pub async fn search_by_keyword(&self, query: &TravelSearchQuery) -> TravelPageResponse {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut params = vec![
            ("keyword".to_string(), query.keyword.clone()),
            ("pageNo".to_string(), page.to_string()),
            ("numOfRows".to_string(), size.to_string()),
        ];
        params.push(("arrange".to_string(), "A".to_string()));

        self.fetch("searchKeyword1", params, page, size).await
    }

    /// 지역 코드로 여행지 목록 조회
    ///
    /// `content_type_id`를 주면 관광지/숙박 등 유형으로 추가 필터링합니다.
    pub async fn list_by_area(&self, query: &TravelAreaQuery) -> TravelPageResponse {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut params = vec![
            ("areaCode".to_string(), query.area_code.clone()),
            ("pageNo".to_string(), page.to_string()),
            ("numOfRows".to_string(), size.to_string()),
        ];
        if let Some(ref content_type_id) = query.content_type_id {
            params.push(("contentTypeId".to_string(), content_type_id.clone()));
        }

        self.fetch("areaBasedList1", params, page, size).await
    }

    async fn fetch(
        &self,
        operation: &str,
        params: Vec<(String, String)>,
        page: u64,
        size: u64,
    ) -> TravelPageResponse {
        let url = build_url(operation, &params);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("TourAPI 요청 실패 ({}): {}", operation, e);
                return TravelPageResponse::empty(page, size);
            }
        };

        if !response.status().is_success() {
            warn!("TourAPI 응답 오류 ({}): {}", operation, response.status());
            return TravelPageResponse::empty(page, size);
        }

        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                warn!("TourAPI 응답 파싱 실패 ({}): {}", operation, e);
                return TravelPageResponse::empty(page, size);
            }
        };

        match parse_tour_response(&body, page, size) {
            Some(result) => result,
            None => {
                warn!("TourAPI 비정상 응답 ({})", operation);
                TravelPageResponse::empty(page, size)
            }
        }
    }
}

impl Default for TravelService {
    fn default() -> Self {
        Self::new()
    }
}

/// TourAPI 요청 URL 조립
///
/// 공통 파라미터(serviceKey, MobileOS, MobileApp, _type)를 붙입니다.
/// serviceKey는 발급 시점에 이미 URL 인코딩된 형태이므로 재인코딩하지 않습니다.
fn build_url(operation: &str, params: &[(String, String)]) -> String {
    let mut query = vec![
        format!("serviceKey={}", TourApiConfig::service_key()),
        "MobileOS=ETC".to_string(),
        "MobileApp=Boomerang".to_string(),
        "_type=json".to_string(),
    ];

    for (key, value) in params {
        query.push(format!("{}={}", key, urlencoding::encode(value)));
    }

    format!(
        "{}/{}?{}",
        TourApiConfig::base_url(),
        operation,
        query.join("&")
    )
}

/// TourAPI 응답 본문을 페이지 응답으로 변환
///
/// `resultCode`가 "0000"이 아니거나 구조가 예상과 다르면 None을 반환합니다.
fn parse_tour_response(body: &Value, page: u64, size: u64) -> Option<TravelPageResponse> {
    let response = body.get("response")?;

    let result_code = response
        .get("header")?
        .get("resultCode")?
        .as_str()?;
    if result_code != RESULT_CODE_OK {
        return None;
    }

    let body = response.get("body")?;
    let total = body.get("totalCount").and_then(Value::as_u64).unwrap_or(0);

    // 결과가 없으면 items가 빈 문자열로 내려온다
    let items = match body.get("items") {
        Some(Value::Object(items)) => match items.get("item") {
            // 다건이면 배열, 단건이면 객체 하나
            Some(Value::Array(entries)) => entries.iter().filter_map(parse_travel_item).collect(),
            Some(entry @ Value::Object(_)) => parse_travel_item(entry).into_iter().collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Some(TravelPageResponse {
        items,
        page,
        size,
        total,
    })
}

fn parse_travel_item(value: &Value) -> Option<TravelItem> {
    let content_id = string_or_number(value, "contentid")?;
    let title = string_or_number(value, "title")?;

    Some(TravelItem {
        content_id,
        title,
        address: string_or_number(value, "addr1"),
        image_url: string_or_number(value, "firstimage").filter(|s| !s.is_empty()),
        latitude: string_or_number(value, "mapy"),
        longitude: string_or_number(value, "mapx"),
        tel: string_or_number(value, "tel").filter(|s| !s.is_empty()),
    })
}

/// 문자열 또는 숫자로 내려오는 필드를 문자열로 정규화
fn string_or_number(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_body(items: Value, total: u64) -> Value {
        json!({
            "response": {
                "header": { "resultCode": "0000", "resultMsg": "OK" },
                "body": {
                    "items": items,
                    "numOfRows": 10,
                    "pageNo": 1,
                    "totalCount": total
                }
            }
        })
    }

    #[test]
    fn test_parse_item_array() {
        let body = ok_body(
            json!({
                "item": [
                    { "contentid": "125266", "title": "경복궁", "addr1": "서울특별시 종로구",
                      "firstimage": "http://img.example/1.jpg", "mapx": "126.976", "mapy": "37.579" },
                    { "contentid": 125405, "title": "남산서울타워" }
                ]
            }),
            2,
        );

        let result = parse_tour_response(&body, 1, 10).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.items[0].content_id, "125266");
        assert_eq!(result.items[0].title, "경복궁");
        assert_eq!(result.items[1].content_id, "125405");
        assert_eq!(result.items[1].image_url, None);
    }

    #[test]
    fn test_parse_single_item_object() {
        // 단건 결과는 배열이 아니라 객체 하나로 내려온다
        let body = ok_body(
            json!({ "item": { "contentid": "126508", "title": "불국사", "tel": "054-746-9913" } }),
            1,
        );

        let result = parse_tour_response(&body, 1, 10).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].tel.as_deref(), Some("054-746-9913"));
    }

    #[test]
    fn test_parse_empty_items_string() {
        // 결과가 없으면 items가 빈 문자열이다
        let body = ok_body(json!(""), 0);

        let result = parse_tour_response(&body, 1, 10).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_parse_rejects_error_result_code() {
        let body = json!({
            "response": {
                "header": { "resultCode": "30", "resultMsg": "SERVICE_KEY_IS_NOT_REGISTERED_ERROR" }
            }
        });

        assert!(parse_tour_response(&body, 1, 10).is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(parse_tour_response(&json!({}), 1, 10).is_none());
        assert!(parse_tour_response(&json!("unexpected"), 1, 10).is_none());
    }

    #[test]
    fn test_item_without_content_id_is_skipped() {
        let body = ok_body(
            json!({ "item": [ { "title": "이름만 있는 항목" }, { "contentid": "1", "title": "정상" } ] }),
            2,
        );

        let result = parse_tour_response(&body, 1, 10).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].title, "정상");
    }

    #[test]
    fn test_empty_image_normalized_to_none() {
        let body = ok_body(
            json!({ "item": { "contentid": "1", "title": "사진 없음", "firstimage": "" } }),
            1,
        );

        let result = parse_tour_response(&body, 1, 10).unwrap();
        assert_eq!(result.items[0].image_url, None);
    }
}
