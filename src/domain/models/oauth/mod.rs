//! OAuth 통합 모델 모듈
//!
//! OAuth 프로바이더의 토큰/사용자 정보 응답 모델과
//! 프로바이더별 속성 집합을 공통 형태로 정규화하는 로직을 제공합니다.

pub mod token_response;
pub mod user_info;

pub use token_response::*;
pub use user_info::*;
