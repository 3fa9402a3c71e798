//! # 관리자 HTTP 핸들러
//!
//! 사용자 목록/조회/역할 변경/삭제와 통계 엔드포인트입니다.
//! 이 모듈의 라우트는 모두 `/admin` 스코프 아래에서
//! `AccessGuard::role(Role::Admin)`으로 보호됩니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::common::{ApiResponse, PageQuery},
    domain::dto::users::request::ChangeRoleRequest,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::auth::AuthService,
    services::posts::PostService,
    services::users::UserService,
};

/// 전체 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /admin/users?page=1&size=10` (관리자 전용)
#[get("/users")]
pub async fn list_users(
    query: web::Query<PageQuery>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.list_users(query.page(), query.size()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 특정 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /admin/users/{id}` (관리자 전용)
#[get("/users/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 사용자 역할 변경 핸들러
///
/// # 엔드포인트
///
/// `PATCH /admin/users/{id}/role` (관리자 전용)
///
/// # 요청 본문
///
/// ```json
/// { "role": "ADMIN" }
/// ```
#[patch("/users/{id}/role")]
pub async fn change_role(
    path: web::Path<String>,
    payload: web::Json<ChangeRoleRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service
        .change_role(&path.into_inner(), &payload.role)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 사용자 삭제 핸들러
///
/// 관리자 자신은 삭제할 수 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /admin/users/{id}` (관리자 전용)
#[delete("/users/{id}")]
pub async fn delete_user(
    admin: AuthenticatedUser,
    path: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    user_service
        .delete_user(&admin.user_id, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message((), "사용자가 삭제되었습니다")))
}

/// 전체 세션 폐기 핸들러
///
/// 저장된 리프레시 토큰을 모두 삭제합니다. 서명 키 교체 같은
/// 운영 작업 후 강제 재로그인이 필요할 때 사용합니다.
///
/// # 엔드포인트
///
/// `POST /admin/tokens/revoke` (관리자 전용)
#[post("/tokens/revoke")]
pub async fn revoke_all_sessions(
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let revoked = auth_service.revoke_all_sessions().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "revoked": revoked }))))
}

/// 사용자 통계 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /admin/statistics` (관리자 전용)
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": { "total_users": 120, "admin_users": 2, "regular_users": 118 }
/// }
/// ```
#[get("/statistics")]
pub async fn statistics(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.statistics().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 게시글 통계 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /admin/statistics/posts` (관리자 전용)
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": { "total_posts": 340, "total_comments": 1205 }
/// }
/// ```
#[get("/statistics/posts")]
pub async fn post_statistics(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service.statistics().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
