//! 여행 정보 서비스 모듈
//!
//! 한국관광공사 TourAPI를 프록시하여 키워드/지역 기반
//! 여행지 검색 기능을 제공합니다.

pub mod travel_service;

pub use travel_service::*;
