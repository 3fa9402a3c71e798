//! # 인증 HTTP 핸들러
//!
//! OAuth 소셜 로그인과 JWT 토큰 관리 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `GET` | `/auth/{provider}/login` | 로그인 URL 생성 | 불필요 |
//! | `GET` | `/auth/{provider}/callback` | OAuth 콜백 처리, 토큰 발급 | 불필요 |
//! | `POST` | `/auth/refresh` | 토큰 갱신 (순환) | 불필요 |
//! | `POST` | `/auth/logout` | 로그아웃 | 필요 |
//! | `GET` | `/auth/validate` | 토큰 유효성 확인 | 불필요 |

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use validator::Validate;

use crate::{
    config::AuthProvider,
    domain::dto::common::ApiResponse,
    domain::dto::tokens::request::RefreshRequest,
    domain::dto::tokens::response::TokenValidationResponse,
    domain::models::auth::authenticated_user::{AuthenticatedUser, OptionalUser},
    errors::errors::AppError,
    services::{auth::AuthService, auth::OAuthService, users::UserService},
};

/// OAuth 콜백 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 사용자가 인증을 거부한 경우 제공자가 내려주는 에러 코드
    pub error: Option<String>,
}

/// OAuth 로그인 URL 생성 핸들러
///
/// # 엔드포인트
///
/// `GET /auth/{provider}/login` (provider: google | kakao)
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": { "login_url": "https://accounts.google.com/...", "state": "..." }
/// }
/// ```
///
/// 지원하지 않는 provider는 400으로 거부됩니다.
#[get("/{provider}/login")]
pub async fn oauth_login_url(
    provider: web::Path<String>,
    oauth_service: web::Data<OAuthService>,
) -> Result<HttpResponse, AppError> {
    let provider =
        AuthProvider::from_str(&provider).map_err(AppError::UnsupportedProvider)?;

    let response = oauth_service.build_login_url(provider)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// OAuth 콜백 처리 핸들러
///
/// 제공자에서 받은 Authorization Code로 사용자를 인증하고,
/// 기존 계정 로그인 또는 신규 가입 후 JWT 토큰 쌍을 발급합니다.
///
/// # 엔드포인트
///
/// `GET /auth/{provider}/callback?code=...&state=...`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 3600,
///     "token_type": "Bearer"
///   }
/// }
/// ```
#[get("/{provider}/callback")]
pub async fn oauth_callback(
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    oauth_service: web::Data<OAuthService>,
    user_service: web::Data<UserService>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let provider =
        AuthProvider::from_str(&provider).map_err(AppError::UnsupportedProvider)?;

    // 사용자가 제공자 화면에서 인증을 거부한 경우
    if let Some(error) = &query.error {
        return Err(AppError::AuthenticationError(format!(
            "인증이 취소되었습니다: {}",
            error
        )));
    }

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AppError::ValidationError("code 파라미터가 없습니다".to_string()))?;
    let state = query.state.as_deref().unwrap_or_default();

    let user_info = oauth_service.authenticate(provider, code, state).await?;
    let user = user_service.find_or_create_oauth_user(user_info).await?;

    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

    let tokens = auth_service.generate_tokens(&user_id, user.role).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(tokens)))
}

/// 토큰 갱신 핸들러
///
/// 유효한 리프레시 토큰을 받아 새 토큰 쌍으로 교체합니다.
/// 이전 리프레시 토큰은 즉시 무효화됩니다.
///
/// # 엔드포인트
///
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::InvalidToken("리프레시 토큰이 비어 있습니다".to_string()))?;

    let tokens = auth_service
        .refresh_access_token(&payload.refresh_token)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(tokens)))
}

/// 로그아웃 핸들러
///
/// 저장소의 리프레시 토큰을 제거합니다. 이미 로그아웃된 상태여도
/// 성공으로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /auth/logout` (인증 필요)
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    auth_service.logout(&user.user_id).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success_with_message((), "로그아웃되었습니다".to_string())))
}

/// 토큰 유효성 확인 핸들러
///
/// 요청의 Bearer 토큰이 유효한지 확인합니다. 토큰이 없거나 무효해도
/// 에러가 아니라 `valid: false`로 응답합니다.
///
/// # 엔드포인트
///
/// `GET /auth/validate`
#[get("/validate")]
pub async fn validate_token(user: OptionalUser) -> Result<HttpResponse, AppError> {
    let response = match user.0 {
        Some(user) => TokenValidationResponse {
            valid: true,
            user_id: Some(user.user_id),
        },
        None => TokenValidationResponse {
            valid: false,
            user_id: None,
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
