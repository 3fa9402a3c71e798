//! # 게시글/댓글 HTTP 핸들러
//!
//! 커뮤니티 게시판 CRUD 엔드포인트입니다. 조회는 공개,
//! 작성/수정/삭제는 인증이 필요합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `GET` | `/posts` | 게시글 목록 (키워드 검색 지원) | 불필요 |
//! | `POST` | `/posts` | 게시글 작성 | 필요 |
//! | `GET` | `/posts/popular` | 인기 게시글 목록 (댓글 많은 순) | 불필요 |
//! | `GET` | `/posts/{id}` | 게시글 단건 조회 | 불필요 |
//! | `PUT` | `/posts/{id}` | 게시글 수정 (작성자만) | 필요 |
//! | `DELETE` | `/posts/{id}` | 게시글 삭제 (작성자/관리자) | 필요 |
//! | `GET` | `/posts/{id}/comments` | 댓글 목록 | 불필요 |
//! | `POST` | `/posts/{id}/comments` | 댓글 작성 | 필요 |
//! | `PUT` | `/comments/{id}` | 댓글 수정 (작성자만) | 필요 |
//! | `DELETE` | `/comments/{id}` | 댓글 삭제 (작성자/관리자) | 필요 |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::{
    domain::dto::common::{ApiResponse, PageQuery},
    domain::dto::posts::request::{CommentRequest, CreatePostRequest, UpdatePostRequest},
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::posts::PostService,
};

/// 게시글 작성 핸들러
///
/// # 엔드포인트
///
/// `POST /posts` (인증 필요)
#[post("")]
pub async fn create_post(
    user: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = post_service.create_post(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// 게시글 목록 조회 핸들러
///
/// `keyword`가 있으면 제목/내용에서 부분 일치 검색합니다.
///
/// # 엔드포인트
///
/// `GET /posts?page=1&size=10&keyword=제주`
#[get("")]
pub async fn list_posts(
    query: web::Query<PageQuery>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service
        .list_posts(query.page(), query.size(), query.keyword.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 인기 게시글 목록 조회 핸들러
///
/// 댓글이 많은 게시글부터 정렬하며, 동률이면 최신 글이 먼저 옵니다.
///
/// # 엔드포인트
///
/// `GET /posts/popular?page=1&size=10`
#[get("/popular")]
pub async fn popular_posts(
    query: web::Query<PageQuery>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service
        .popular_posts(query.page(), query.size())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 게시글 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /posts/{id}`
#[get("/{id}")]
pub async fn get_post(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service.get_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 게시글 수정 핸들러
///
/// 작성자 본인만 수정할 수 있습니다.
///
/// # 엔드포인트
///
/// `PUT /posts/{id}` (인증 필요)
#[put("/{id}")]
pub async fn update_post(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = post_service
        .update_post(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 게시글 삭제 핸들러
///
/// 작성자 본인 또는 관리자만 삭제할 수 있습니다. 댓글도 함께 삭제됩니다.
///
/// # 엔드포인트
///
/// `DELETE /posts/{id}` (인증 필요)
#[delete("/{id}")]
pub async fn delete_post(
    user: AuthenticatedUser,
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    post_service.delete_post(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message((), "게시글이 삭제되었습니다")))
}

/// 댓글 작성 핸들러
///
/// # 엔드포인트
///
/// `POST /posts/{id}/comments` (인증 필요)
#[post("/{id}/comments")]
pub async fn add_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = post_service
        .add_comment(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// 댓글 목록 조회 핸들러
///
/// 작성 시각 오름차순으로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /posts/{id}/comments`
#[get("/{id}/comments")]
pub async fn list_comments(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = post_service.list_comments(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 댓글 수정 핸들러
///
/// 작성자 본인만 수정할 수 있습니다.
///
/// # 엔드포인트
///
/// `PUT /comments/{id}` (인증 필요)
#[put("/{id}")]
pub async fn update_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = post_service
        .update_comment(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 댓글 삭제 핸들러
///
/// 작성자 본인 또는 관리자만 삭제할 수 있습니다.
///
/// # 엔드포인트
///
/// `DELETE /comments/{id}` (인증 필요)
#[delete("/{id}")]
pub async fn delete_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    post_service
        .delete_comment(&user, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message((), "댓글이 삭제되었습니다")))
}
