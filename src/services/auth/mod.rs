//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 OAuth 2.0 소셜 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급, 검증, 순환
//! - Google/Kakao OAuth 2.0 소셜 로그인
//! - Redis 기반 리프레시 토큰 저장소 연동
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료 판정 유예 시간 없음 (leeway 0)
//! - 리프레시 토큰 순환 (재발급 시 이전 토큰 즉시 무효화)
//! - CSRF 방지 (OAuth State 매개변수)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, JwtTokenProvider, OAuthService};
//!
//! let token_provider = JwtTokenProvider::from_env();
//! let auth_service = AuthService::new(token_provider, token_repo, user_repo);
//!
//! let tokens = auth_service.generate_tokens(&user_id, role).await?;
//! ```

pub mod auth_service;
pub mod oauth_service;
pub mod token_provider;

pub use auth_service::*;
pub use oauth_service::*;
pub use token_provider::*;
