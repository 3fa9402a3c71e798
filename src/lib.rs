//! 부메랑 백엔드
//!
//! Rust 기반의 커뮤니티/여행 정보 서비스 백엔드입니다.
//! Google/Kakao OAuth 2.0 소셜 로그인, JWT 토큰 기반 인증,
//! 게시글/댓글 관리, 그리고 한국관광공사 TourAPI 프록시를 제공합니다.
//!
//! # Features
//!
//! - **소셜 로그인**: Google, Kakao OAuth 2.0
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증, Redis 리프레시 토큰 저장소
//! - **사용자 관리**: 프로필/닉네임 관리, 관리자 기능
//! - **게시판**: 게시글/댓글 CRUD, 키워드 검색
//! - **여행 정보**: TourAPI 키워드/지역 검색 프록시
//! - **MongoDB**: 사용자/게시글 데이터 영구 저장
//! - **Redis**: 리프레시 토큰 저장 및 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use boomerang_backend::services::auth::{AuthService, JwtTokenProvider};
//!
//! // 서비스는 main에서 명시적으로 조립되어 web::Data로 공유됩니다
//! let token_provider = JwtTokenProvider::from_env();
//! let auth_service = AuthService::new(token_provider.clone(), token_repo, user_repo);
//!
//! let tokens = auth_service.generate_tokens(&user_id, role).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
