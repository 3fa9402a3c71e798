//! # 애플리케이션 에러 모듈
//!
//! HTTP 응답으로 변환 가능한 통합 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
