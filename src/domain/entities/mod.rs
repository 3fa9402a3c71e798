//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **인덱스 설정**: `Database::ensure_indexes`에서 유니크 인덱스 보장
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/          ← 사용자 엔티티 (User, Role)
//! └── posts/          ← 게시판 엔티티 (Post, Comment)
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//!   (`Comment.post_id`, `Post.author_id`)
//! - **인덱스 설계**: 쿼리 패턴에 맞는 인덱스 설계 필수

pub mod users;
pub mod posts;
