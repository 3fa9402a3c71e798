//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//! 인증은 두 단계로 나뉩니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 필터 (AuthMiddleware)
//! - 앱 전역에 등록
//! - Bearer 토큰을 검증해 사용자 신원을 request extension에 저장
//! - 요청을 절대 거부하지 않음 (토큰이 없거나 무효해도 통과)
//!
//! ### 2. 접근 게이트 (AccessGuard)
//! - 보호가 필요한 스코프에만 등록
//! - 신원 없으면 401, 역할이 부족하면 403으로 거부
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//! use crate::middlewares::{AccessGuard, AuthMiddleware};
//!
//! App::new()
//!     .wrap(AuthMiddleware::new(token_provider.clone()))
//!     .service(
//!         web::scope("/api/v1/admin")
//!             .wrap(AccessGuard::role(Role::Admin))
//!             .configure(admin_routes),
//!     )
//! ```

pub mod access_guard;
pub mod auth_middleware;

pub use access_guard::AccessGuard;
pub use auth_middleware::AuthMiddleware;
