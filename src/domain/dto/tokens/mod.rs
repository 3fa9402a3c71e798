//! 토큰 발급/갱신 DTO 모듈

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
