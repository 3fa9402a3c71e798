//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **공통 래퍼**: 모든 응답은 `ApiResponse<T>` 형태로 감싸서 반환
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: validator crate를 통한 비즈니스 규칙 검증
//! - **에러 메시지**: 사용자 친화적인 한국어 검증 실패 메시지
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 내부 식별자 외 민감한 정보의 노출 방지
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common.rs       # ApiResponse, 페이지네이션
//! ├── tokens/         # 토큰 발급/갱신 DTO
//! ├── users/          # 사용자/관리자 DTO
//! ├── posts/          # 게시글/댓글 DTO
//! └── travel/         # 여행 정보 DTO
//! ```
//!
//! ## 명명 규칙
//!
//! - **Request DTO**: `{Action}{Entity}Request` (예: `CreatePostRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `UserResponse`)
//! - **날짜/시간**: ISO 8601 문자열 형식 사용

pub mod common;
pub mod tokens;
pub mod users;
pub mod posts;
pub mod travel;

pub use common::*;
pub use tokens::*;
pub use users::*;
pub use posts::*;
pub use travel::*;
