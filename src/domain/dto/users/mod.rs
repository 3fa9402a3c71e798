//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request.rs      # 닉네임 변경, 역할 변경 요청
//! └── response.rs     # 사용자 정보, 닉네임 확인, 통계 응답
//! ```
//!
//! ## 보안
//!
//! `UserResponse`는 `provider_id` 같은 내부 연동 식별자를 노출하지 않습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
