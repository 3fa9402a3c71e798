//! 리프레시 토큰 저장소 모듈
//!
//! Redis를 사용하여 사용자당 하나의 리프레시 토큰을 관리합니다.
//!
//! # Features
//!
//! - **사용자당 단일 토큰**: 새 토큰 저장 시 이전 토큰은 자동으로 대체
//! - **TTL 자동 관리**: Redis TTL을 통한 자동 만료 처리 (저장 시마다 갱신)
//! - **멱등 삭제**: 없는 토큰을 삭제해도 성공으로 처리
//! - **전체 무효화**: 관리 작업용 일괄 삭제 지원
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::token_repository::TokenRepository;
//!
//! let token_repo = TokenRepository::new(redis.clone());
//! token_repo.save_refresh_token("user123", "jwt-refresh-token").await?;
//! let stored = token_repo.get_refresh_token("user123").await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
