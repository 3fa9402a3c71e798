//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 외부 시스템 통합 모델 (OAuth, 인증 컨텍스트)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 영속되는 비즈니스 객체들입니다. `User`, `Post`, `Comment`가
//! 여기에 속하며, ObjectId 기반 식별자와 생성/수정 시각을 가집니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! `validator`를 통한 입력 검증과 `ApiResponse` 공통 응답 래퍼를 포함합니다.
//!
//! ### [`models`] - 외부 시스템 통합 모델
//!
//! OAuth 프로바이더 응답, 요청 컨텍스트의 인증 사용자 등
//! 영속되지 않는 도메인 모델들입니다.
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **Null Safety**: `Option<T>`를 통한 안전한 부재 값 처리
//!   (OAuth 프로바이더가 이메일을 주지 않는 경우 등)
//! - **명시적 변환**: `From` trait을 통한 Entity → Response 변환

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
