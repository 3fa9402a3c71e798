//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 관리자, 게시판, 여행 정보 라우트와 헬스체크를 포함합니다.
//!
//! # 인증 모델
//!
//! `AuthMiddleware`는 앱 전역에서 토큰을 해석만 하고 요청을 거부하지 않습니다.
//! 실제 차단은 두 곳에서 일어납니다:
//!
//! - 핸들러의 `AuthenticatedUser` 추출자: 공개/보호 라우트가 섞인
//!   스코프에서 보호 라우트만 401을 반환합니다.
//! - `AccessGuard::role(Role::Admin)`: `/api/v1/admin` 스코프 전체를
//!   관리자 역할로 제한합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::domain::entities::users::user::Role;
use crate::handlers;
use crate::middlewares::AccessGuard;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_admin_routes(cfg);
    configure_post_routes(cfg);
    configure_travel_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// OAuth 로그인, 토큰 갱신/검증, 로그아웃 엔드포인트를 등록합니다.
/// 로그아웃만 인증이 필요하며 추출자 수준에서 검증됩니다.
///
/// # Available Routes
///
/// - `GET /api/v1/auth/{provider}/login` - 소셜 로그인 URL 생성
/// - `GET /api/v1/auth/{provider}/callback` - OAuth 콜백 처리
/// - `POST /api/v1/auth/refresh` - 토큰 갱신 (회전)
/// - `POST /api/v1/auth/logout` - 로그아웃 (인증 필요)
/// - `GET /api/v1/auth/validate` - 액세스 토큰 유효성 확인
///
/// # Examples
///
/// ```bash
/// # Google 로그인 URL 발급
/// curl http://localhost:8080/api/v1/auth/google/login
///
/// # 토큰 갱신
/// curl -X POST http://localhost:8080/api/v1/auth/refresh \
///   -H "Content-Type: application/json" \
///   -d '{"refresh_token":"eyJhbGciOiJIUzI1NiJ9..."}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::logout)
            .service(handlers::auth::validate_token)
            .service(handlers::auth::oauth_login_url)
            .service(handlers::auth::oauth_callback),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/users/me` - 내 정보 조회 (인증 필요)
/// - `PATCH /api/v1/users/me/nickname` - 닉네임 변경 (인증 필요)
/// - `GET /api/v1/users/me/posts` - 내 게시글 목록 (인증 필요)
/// - `GET /api/v1/users/me/comments` - 내 댓글 목록 (인증 필요)
/// - `GET /api/v1/users/nickname/check` - 닉네임 사용 가능 여부
/// - `GET /api/v1/users/nickname/suggest` - 닉네임 추천
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::get_me)
            .service(handlers::users::update_nickname)
            .service(handlers::users::get_my_posts)
            .service(handlers::users::get_my_comments)
            .service(handlers::users::check_nickname)
            .service(handlers::users::suggest_nicknames),
    );
}

/// 관리자 전용 라우트를 설정합니다
///
/// 스코프 전체가 `AccessGuard::role(Role::Admin)`으로 보호됩니다.
///
/// # Available Routes
///
/// - `GET /api/v1/admin/users` - 전체 사용자 목록
/// - `GET /api/v1/admin/users/{id}` - 사용자 조회
/// - `PATCH /api/v1/admin/users/{id}/role` - 역할 변경
/// - `DELETE /api/v1/admin/users/{id}` - 사용자 삭제
/// - `GET /api/v1/admin/statistics` - 사용자 통계
/// - `GET /api/v1/admin/statistics/posts` - 게시글 통계
/// - `POST /api/v1/admin/tokens/revoke` - 전체 세션 폐기
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(AccessGuard::role(Role::Admin))
            .service(handlers::admin::list_users)
            .service(handlers::admin::post_statistics)
            .service(handlers::admin::statistics)
            .service(handlers::admin::revoke_all_sessions)
            .service(handlers::admin::change_role)
            .service(handlers::admin::delete_user)
            .service(handlers::admin::get_user),
    );
}

/// 게시판 라우트를 설정합니다
///
/// 조회는 공개, 작성/수정/삭제는 추출자 수준에서 인증을 요구합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/posts` - 게시글 목록 (키워드 검색)
/// - `POST /api/v1/posts` - 게시글 작성 (인증 필요)
/// - `GET /api/v1/posts/popular` - 인기 게시글 목록 (댓글 많은 순)
/// - `GET /api/v1/posts/{id}` - 게시글 조회
/// - `PUT /api/v1/posts/{id}` - 게시글 수정 (인증 필요)
/// - `DELETE /api/v1/posts/{id}` - 게시글 삭제 (인증 필요)
/// - `GET /api/v1/posts/{id}/comments` - 댓글 목록
/// - `POST /api/v1/posts/{id}/comments` - 댓글 작성 (인증 필요)
/// - `PUT /api/v1/comments/{id}` - 댓글 수정 (인증 필요)
/// - `DELETE /api/v1/comments/{id}` - 댓글 삭제 (인증 필요)
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/posts")
            .service(handlers::posts::create_post)
            .service(handlers::posts::list_posts)
            // "/popular"는 "/{id}"보다 먼저 등록되어야 한다
            .service(handlers::posts::popular_posts)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::list_comments)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post),
    );

    cfg.service(
        web::scope("/api/v1/comments")
            .service(handlers::posts::update_comment)
            .service(handlers::posts::delete_comment),
    );
}

/// 여행 정보 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/travel/search` - 키워드 검색
/// - `GET /api/v1/travel/areas` - 지역 기반 목록
fn configure_travel_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/travel")
            .service(handlers::travel::search_travel)
            .service(handlers::travel::list_travel_by_area),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "boomerang_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "travel_source": "TourAPI"
        }
    }))
}
