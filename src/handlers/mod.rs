//! # HTTP 핸들러 계층
//!
//! 요청 파싱/검증과 응답 직렬화만 담당하고, 비즈니스 로직은
//! 서비스 계층에 위임합니다. 모든 응답은 `ApiResponse` 래퍼를 따릅니다.

pub mod admin;
pub mod auth;
pub mod posts;
pub mod travel;
pub mod users;
