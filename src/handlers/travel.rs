//! # 여행 정보 HTTP 핸들러
//!
//! TourAPI 프록시 엔드포인트입니다. 인증 없이 접근할 수 있으며,
//! 업스트림 장애 시에도 빈 목록으로 200을 반환합니다.

use actix_web::{HttpResponse, get, web};

use crate::{
    domain::dto::common::ApiResponse,
    domain::dto::travel::{TravelAreaQuery, TravelSearchQuery},
    errors::errors::AppError,
    services::travel::TravelService,
};

/// 키워드 기반 여행지 검색 핸들러
///
/// # 엔드포인트
///
/// `GET /travel/search?keyword=제주&page=1&size=10`
#[get("/search")]
pub async fn search_travel(
    query: web::Query<TravelSearchQuery>,
    travel_service: web::Data<TravelService>,
) -> Result<HttpResponse, AppError> {
    let response = travel_service.search_by_keyword(&query.into_inner()).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 지역 기반 여행지 목록 핸들러
///
/// # 엔드포인트
///
/// `GET /travel/areas?area_code=39&content_type_id=12&page=1&size=10`
#[get("/areas")]
pub async fn list_travel_by_area(
    query: web::Query<TravelAreaQuery>,
    travel_service: web::Data<TravelService>,
) -> Result<HttpResponse, AppError> {
    let response = travel_service.list_by_area(&query.into_inner()).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
