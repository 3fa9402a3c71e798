//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화된 서비스들을 제공합니다. 서비스는 main에서
//! 명시적으로 조립되어 `web::Data`로 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - OAuth 2.0 소셜 로그인 및 JWT 세션 관리
//! - 사용자 생명주기 및 닉네임 관리
//! - 게시글/댓글 CRUD
//! - TourAPI 여행 정보 프록시
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, users::UserService};
//!
//! let user_service = UserService::new(user_repo.clone());
//! let auth_service = AuthService::new(token_provider, token_repo, user_repo);
//! ```

pub mod auth;
pub mod posts;
pub mod travel;
pub mod users;
