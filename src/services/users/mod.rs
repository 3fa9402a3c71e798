//! 사용자 관리 서비스 모듈
//!
//! 소셜 로그인 사용자의 가입/조회, 닉네임 관리, 관리자 기능을 담당합니다.
//!
//! # Features
//!
//! - 연합 신원 기반 가입 및 로그인 (find-or-create)
//! - 고유 닉네임 생성, 중복 확인, 추천
//! - 관리자 전용 목록/역할 변경/삭제/통계
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let user = user_service.find_or_create_oauth_user(user_info).await?;
//! ```

pub mod user_service;

pub use user_service::*;
