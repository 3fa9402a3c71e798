//! 인증 컨텍스트 모델 모듈
//!
//! 인증 필터가 요청 확장(extensions)에 심어 두는 사용자 모델과
//! 핸들러에서 이를 꺼내 쓰는 추출자를 제공합니다.

pub mod authenticated_user;

pub use authenticated_user::*;
