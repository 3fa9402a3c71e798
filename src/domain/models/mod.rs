//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 외부 시스템 통합 모델을 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `Post`, `Comment`
//!
//! ### Models (이 모듈)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `AuthenticatedUser`, `OAuth2UserInfo`, `OAuthTokenResponse`
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 요청 컨텍스트의 인증 사용자 모델과 추출자
//! - [`oauth`] - OAuth 프로바이더 응답 모델과 속성 정규화

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
