//! # 사용자 HTTP 핸들러
//!
//! 본인 프로필 조회/수정과 닉네임 관련 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `GET` | `/users/me` | 내 정보 조회 | 필요 |
//! | `PATCH` | `/users/me/nickname` | 닉네임 변경 | 필요 |
//! | `GET` | `/users/me/posts` | 내 게시글 목록 | 필요 |
//! | `GET` | `/users/me/comments` | 내 댓글 목록 | 필요 |
//! | `GET` | `/users/nickname/check` | 닉네임 사용 가능 여부 | 불필요 |
//! | `GET` | `/users/nickname/suggest` | 닉네임 추천 | 불필요 |

use actix_web::{HttpResponse, get, patch, web};
use validator::Validate;

use crate::{
    domain::dto::common::{ApiResponse, PageQuery},
    domain::dto::users::request::{NicknameQuery, SuggestQuery, UpdateNicknameRequest},
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::posts::PostService,
    services::users::UserService,
};

/// 내 정보 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/me` (인증 필요)
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "507f1f77bcf86cd799439011",
///     "email": "user@example.com",
///     "nickname": "여행자",
///     "provider": "GOOGLE",
///     "role": "USER"
///   }
/// }
/// ```
#[get("/me")]
pub async fn get_me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 닉네임 변경 핸들러
///
/// # 엔드포인트
///
/// `PATCH /users/me/nickname` (인증 필요)
///
/// 이미 사용 중인 닉네임이면 409로 거부됩니다.
#[patch("/me/nickname")]
pub async fn update_nickname(
    user: AuthenticatedUser,
    payload: web::Json<UpdateNicknameRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service
        .update_nickname(&user.user_id, &payload.nickname)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 내 게시글 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/me/posts?page=1&size=10` (인증 필요)
#[get("/me/posts")]
pub async fn get_my_posts(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service
        .list_posts_by_author(&user, query.page(), query.size())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 내 댓글 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/me/comments?page=1&size=10` (인증 필요)
#[get("/me/comments")]
pub async fn get_my_comments(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service
        .list_comments_by_author(&user, query.page(), query.size())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 닉네임 사용 가능 여부 확인 핸들러
///
/// # 엔드포인트
///
/// `GET /users/nickname/check?nickname=여행자`
#[get("/nickname/check")]
pub async fn check_nickname(
    query: web::Query<NicknameQuery>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.check_nickname(&query.nickname).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 닉네임 추천 핸들러
///
/// 기반 닉네임에서 사용 가능한 후보를 최대 `count`개 추천합니다.
///
/// # 엔드포인트
///
/// `GET /users/nickname/suggest?nickname=여행자&count=5`
#[get("/nickname/suggest")]
pub async fn suggest_nicknames(
    query: web::Query<SuggestQuery>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let count = query.count.clamp(1, 20);
    let response = user_service
        .suggest_nicknames(&query.nickname, count)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
