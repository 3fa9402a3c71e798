//! # 인증 세션 서비스
//!
//! JWT 토큰 발급, 리프레시 토큰 순환, 로그아웃을 담당하는
//! 세션 관리의 중심 서비스입니다.
//!
//! ## 토큰 순환 정책
//!
//! 리프레시 요청이 성공하면 액세스 토큰과 리프레시 토큰을 모두
//! 재발급하고, 저장소의 토큰도 새 값으로 교체합니다. 이전 리프레시
//! 토큰은 그 즉시 무효화됩니다.

use log::{debug, info};

use crate::{
    domain::dto::tokens::response::{TokenResponse, TokenValidationResponse},
    domain::entities::users::user::Role,
    errors::errors::AppError,
    repositories::tokens::token_repository::TokenRepository,
    repositories::users::user_repo::UserRepository,
    services::auth::token_provider::JwtTokenProvider,
};

/// 인증 세션 서비스
#[derive(Clone)]
pub struct AuthService {
    token_provider: JwtTokenProvider,
    token_repository: TokenRepository,
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(
        token_provider: JwtTokenProvider,
        token_repository: TokenRepository,
        user_repository: UserRepository,
    ) -> Self {
        Self {
            token_provider,
            token_repository,
            user_repository,
        }
    }

    /// 사용자에게 토큰 쌍 발급
    ///
    /// 액세스/리프레시 토큰을 생성하고, 리프레시 토큰은 저장소에
    /// TTL과 함께 저장합니다. 이미 저장된 토큰이 있으면 덮어씁니다.
    pub async fn generate_tokens(
        &self,
        user_id: &str,
        role: Role,
    ) -> Result<TokenResponse, AppError> {
        let access_token = self.token_provider.create_access_token(user_id, role)?;
        let refresh_token = self.token_provider.create_refresh_token(user_id)?;

        self.token_repository
            .save_refresh_token(user_id, &refresh_token)
            .await?;

        info!("토큰 발급 완료: user_id={}", user_id);

        Ok(TokenResponse::bearer(
            access_token,
            refresh_token,
            self.token_provider.access_token_validity_seconds(),
        ))
    }

    /// 리프레시 토큰으로 토큰 쌍 갱신
    ///
    /// # 처리 단계
    ///
    /// 1. 토큰 자체 검증 (서명/만료) - 실패 시 저장소 접근 없이 거부
    /// 2. 저장소의 토큰과 정확히 일치하는지 확인
    /// 3. 사용자 레코드에서 최신 역할을 다시 읽음
    /// 4. 새 토큰 쌍 발급 및 저장소 교체
    ///
    /// # 에러
    ///
    /// * `AppError::InvalidToken` - 빈 토큰, 검증 실패, 저장 토큰 불일치
    /// * `AppError::NotFound` - 토큰의 사용자가 더 이상 존재하지 않음
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, AppError> {
        if refresh_token.trim().is_empty() {
            return Err(AppError::InvalidToken(
                "리프레시 토큰이 비어 있습니다".to_string(),
            ));
        }

        let claims = self.token_provider.validate(refresh_token)?;
        let user_id = claims.sub;

        // 저장소의 토큰과 정확히 일치해야 한다 (순환된 이전 토큰 거부)
        let stored = self.token_repository.get_refresh_token(&user_id).await?;
        match stored {
            Some(stored) if stored == refresh_token => {}
            _ => {
                debug!("저장된 리프레시 토큰과 불일치: user_id={}", user_id);
                return Err(AppError::InvalidToken(
                    "유효하지 않은 리프레시 토큰입니다".to_string(),
                ));
            }
        }

        // 역할은 토큰이 아니라 사용자 레코드에서 최신 값을 읽는다
        let user = self
            .user_repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        self.generate_tokens(&user_id, user.role).await
    }

    /// 로그아웃
    ///
    /// 저장소의 리프레시 토큰을 제거합니다. 토큰이 이미 없어도
    /// 성공으로 처리합니다 (멱등).
    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        if !self.token_repository.has_refresh_token(user_id).await? {
            debug!("로그아웃: 활성 세션 없음 user_id={}", user_id);
        }

        self.token_repository.delete_refresh_token(user_id).await?;
        info!("로그아웃 완료: user_id={}", user_id);
        Ok(())
    }

    /// 모든 사용자의 리프레시 토큰 일괄 폐기
    ///
    /// 서명 키 교체 등 운영 작업에서 사용하는 관리자 전용 기능입니다.
    /// 발급된 액세스 토큰은 남은 유효기간 동안 계속 유효합니다.
    ///
    /// # 반환값
    ///
    /// 삭제된 토큰 개수
    pub async fn revoke_all_sessions(&self) -> Result<u64, AppError> {
        let count = self.token_repository.delete_all_refresh_tokens().await?;
        info!("전체 세션 폐기 완료: {}개", count);
        Ok(count)
    }

    /// 액세스 토큰 유효성 검사
    ///
    /// 검증 실패는 에러가 아니라 `valid: false` 응답으로 표현됩니다.
    pub fn validate_access_token(&self, token: &str) -> TokenValidationResponse {
        match self.token_provider.validate(token) {
            Ok(claims) => TokenValidationResponse {
                valid: true,
                user_id: Some(claims.sub),
            },
            Err(_) => TokenValidationResponse {
                valid: false,
                user_id: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::redis::RedisClient;
    use crate::config::AuthProvider;
    use crate::db::Database;
    use crate::domain::entities::users::user::User;
    use std::sync::Arc;

    // 연결 없이 조립만 하는 테스트 픽스처
    async fn service() -> AuthService {
        let redis = Arc::new(RedisClient::default());
        let db = Arc::new(Database::offline_for_tests());

        AuthService::new(
            JwtTokenProvider::new("test-secret-key", 3600, 604800),
            TokenRepository::with_config(redis.clone(), "refresh_token:".to_string(), 604800),
            UserRepository::new(db, redis),
        )
    }

    // 인메모리 저장소 기반 픽스처 (사용자 1명 가입 상태)
    async fn stateful_service() -> (AuthService, String) {
        let user_repo = UserRepository::in_memory();
        let user = user_repo
            .create(User::new_oauth(
                Some("traveler@example.com".to_string()),
                "여행자".to_string(),
                AuthProvider::Google,
                "google-123".to_string(),
                None,
            ))
            .await
            .unwrap();

        let service = AuthService::new(
            JwtTokenProvider::new("test-secret-key", 3600, 604800),
            TokenRepository::in_memory(),
            user_repo,
        );

        (service, user.id_string().unwrap())
    }

    #[actix_web::test]
    async fn test_refresh_rotates_and_invalidates_old_token() {
        let (service, user_id) = stateful_service().await;

        let first = service.generate_tokens(&user_id, Role::User).await.unwrap();
        let second = service
            .refresh_access_token(&first.refresh_token)
            .await
            .unwrap();

        assert_ne!(first.refresh_token, second.refresh_token);

        // 순환된 이전 토큰은 서명이 유효해도 재사용할 수 없다
        let replay = service.refresh_access_token(&first.refresh_token).await;
        assert!(matches!(replay, Err(AppError::InvalidToken(_))));

        // 최신 토큰은 계속 갱신 가능하다
        assert!(service.refresh_access_token(&second.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_logout_invalidates_refresh_token() {
        let (service, user_id) = stateful_service().await;

        let tokens = service.generate_tokens(&user_id, Role::User).await.unwrap();
        service.logout(&user_id).await.unwrap();

        let result = service.refresh_access_token(&tokens.refresh_token).await;
        assert!(matches!(result, Err(AppError::InvalidToken(_))));

        // 세션이 없어도 로그아웃은 멱등이다
        assert!(service.logout(&user_id).await.is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_picks_up_latest_role() {
        let (service, user_id) = stateful_service().await;

        let tokens = service.generate_tokens(&user_id, Role::User).await.unwrap();

        // 역할 승격 후 갱신하면 새 액세스 토큰에는 최신 역할이 실린다
        service
            .user_repository
            .update_role(&user_id, Role::Admin)
            .await
            .unwrap();

        let refreshed = service
            .refresh_access_token(&tokens.refresh_token)
            .await
            .unwrap();

        let claims = service
            .token_provider
            .validate(&refreshed.access_token)
            .unwrap();
        assert_eq!(claims.role, Some(Role::Admin));
    }

    #[actix_web::test]
    async fn test_revoke_all_sessions_counts_deleted_tokens() {
        let (service, user_id) = stateful_service().await;

        service.generate_tokens(&user_id, Role::User).await.unwrap();
        assert_eq!(service.revoke_all_sessions().await.unwrap(), 1);
        assert_eq!(service.revoke_all_sessions().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_rejects_blank_token() {
        let service = service().await;

        let result = service.refresh_access_token("   ").await;
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[actix_web::test]
    async fn test_refresh_rejects_garbage_token() {
        let service = service().await;

        let result = service.refresh_access_token("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[actix_web::test]
    async fn test_validate_access_token_reports_invalid() {
        let service = service().await;

        let response = service.validate_access_token("garbage");
        assert!(!response.valid);
        assert_eq!(response.user_id, None);
    }

    #[actix_web::test]
    async fn test_validate_access_token_reports_valid() {
        let service = service().await;

        let provider = JwtTokenProvider::new("test-secret-key", 3600, 604800);
        let token = provider
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let response = service.validate_access_token(&token);
        assert!(response.valid);
        assert_eq!(response.user_id.as_deref(), Some("507f1f77bcf86cd799439011"));
    }
}
