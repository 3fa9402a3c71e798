//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 소셜 로그인 사용자의 최초 가입(find-or-create), 닉네임 관리,
//! 관리자 기능(목록/역할 변경/삭제/통계)을 담당합니다.
//!
//! ## 연합 신원 해석
//!
//! 소셜 로그인 사용자는 (provider, provider_id) 쌍으로 식별됩니다.
//! 같은 쌍으로 다시 로그인하면 기존 계정으로 해석되고,
//! 처음 보는 쌍이면 고유 닉네임을 생성해 새 계정을 만듭니다.
//!
//! ```text
//! OAuth 사용자 정보 획득
//!           │
//!           ▼
//! (provider, provider_id)로 기존 사용자 조회
//!           │
//!           ├─ 사용자 있음 ──► 로그인 성공
//!           │
//!           └─ 사용자 없음 ──► 고유 닉네임 생성 후 신규 가입
//! ```

use log::info;

use crate::{
    domain::{
        dto::common::PageResponse,
        dto::users::response::{
            NicknameCheckResponse, NicknameSuggestResponse, UserResponse, UserStatisticsResponse,
        },
        entities::users::user::{Role, User},
        models::oauth::user_info::OAuth2UserInfo,
    },
    errors::errors::AppError,
    repositories::users::user_repo::UserRepository,
};

/// 닉네임 생성 시 최대 시도 횟수
const MAX_NICKNAME_ATTEMPTS: u32 = 1000;

/// 닉네임 힌트가 없거나 비어 있을 때 사용하는 기본값
const DEFAULT_NICKNAME_BASE: &str = "사용자";

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 주요 책임
///
/// 1. **연합 신원 해석**: 소셜 로그인 사용자 조회 또는 신규 가입
/// 2. **닉네임 관리**: 중복 확인, 변경, 추천
/// 3. **관리자 기능**: 사용자 목록, 역할 변경, 삭제, 통계
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// 소셜 신원으로 사용자 조회, 없으면 신규 가입
    ///
    /// 닉네임은 제공자의 이름 힌트로 시작하되, 이미 사용 중이면
    /// 숫자 접미사를 붙여 고유한 값을 만듭니다.
    pub async fn find_or_create_oauth_user(
        &self,
        user_info: OAuth2UserInfo,
    ) -> Result<User, AppError> {
        if let Some(existing) = self
            .user_repo
            .find_by_provider(user_info.provider, &user_info.id)
            .await?
        {
            info!(
                "{} 사용자 로그인: user_id={}",
                user_info.provider.as_str(),
                existing.id_string().unwrap_or_default()
            );
            return Ok(existing);
        }

        let nickname = self
            .generate_unique_nickname(user_info.name.as_deref())
            .await?;

        info!(
            "새 {} 사용자 등록: nickname={}",
            user_info.provider.as_str(),
            nickname
        );

        let user = User::new_oauth(
            user_info.email,
            nickname,
            user_info.provider,
            user_info.id,
            user_info.image_url,
        );

        self.user_repo.create(user).await
    }

    /// 중복되지 않는 고유 닉네임 생성
    ///
    /// # 생성 규칙
    ///
    /// ```text
    /// 힌트 "여행자" → "여행자" → "여행자1" → "여행자2" → ...
    /// 힌트 없음    → "사용자" → "사용자1" → "사용자2" → ...
    /// ```
    pub async fn generate_unique_nickname(&self, hint: Option<&str>) -> Result<String, AppError> {
        let base = nickname_base(hint);

        if !self.user_repo.nickname_exists(&base).await? {
            return Ok(base);
        }

        for counter in 1..=MAX_NICKNAME_ATTEMPTS {
            let candidate = format!("{}{}", base, counter);
            if !self.user_repo.nickname_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::InternalError("닉네임 생성 실패".to_string()))
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 닉네임 변경
    ///
    /// # 에러
    ///
    /// * `AppError::ConflictError` - 다른 사용자가 이미 사용 중인 닉네임
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    pub async fn update_nickname(
        &self,
        user_id: &str,
        nickname: &str,
    ) -> Result<UserResponse, AppError> {
        // 본인이 이미 쓰는 닉네임으로의 변경은 허용
        if let Some(owner) = self.user_repo.find_by_nickname(nickname).await? {
            if owner.id_string().as_deref() != Some(user_id) {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 닉네임입니다".to_string(),
                ));
            }
        }

        let updated = self
            .user_repo
            .update_nickname(user_id, nickname)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 닉네임 사용 가능 여부 확인
    pub async fn check_nickname(&self, nickname: &str) -> Result<NicknameCheckResponse, AppError> {
        let available = !self.user_repo.nickname_exists(nickname).await?;

        Ok(NicknameCheckResponse {
            nickname: nickname.to_string(),
            available,
        })
    }

    /// 사용 가능한 닉네임 후보 추천
    ///
    /// 기본 닉네임에 숫자 접미사를 붙여가며 사용 가능한 후보를
    /// 요청 개수만큼 모읍니다.
    pub async fn suggest_nicknames(
        &self,
        base: &str,
        count: usize,
    ) -> Result<NicknameSuggestResponse, AppError> {
        let base = nickname_base(Some(base));
        let mut suggestions = Vec::with_capacity(count);

        if !self.user_repo.nickname_exists(&base).await? {
            suggestions.push(base.clone());
        }

        let mut counter = 1;
        while suggestions.len() < count && counter <= MAX_NICKNAME_ATTEMPTS {
            let candidate = format!("{}{}", base, counter);
            if !self.user_repo.nickname_exists(&candidate).await? {
                suggestions.push(candidate);
            }
            counter += 1;
        }

        Ok(NicknameSuggestResponse { suggestions })
    }

    /// 사용자 목록 페이지 조회 (관리자 전용)
    pub async fn list_users(
        &self,
        page: u64,
        size: u64,
    ) -> Result<PageResponse<UserResponse>, AppError> {
        let users = self.user_repo.find_page(page, size).await?;
        let total = self.user_repo.count().await?;

        let items = users.into_iter().map(UserResponse::from).collect();

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 사용자 역할 변경 (관리자 전용)
    pub async fn change_role(&self, user_id: &str, role: &str) -> Result<UserResponse, AppError> {
        let role = Role::from_str(role).map_err(AppError::ValidationError)?;

        let updated = self
            .user_repo
            .update_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        info!("사용자 역할 변경: user_id={}, role={}", user_id, role.as_str());

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제 (관리자 전용)
    ///
    /// 관리자가 자기 자신을 삭제하는 것은 허용하지 않습니다.
    pub async fn delete_user(&self, admin_id: &str, target_id: &str) -> Result<(), AppError> {
        if admin_id == target_id {
            return Err(AppError::ValidationError(
                "자기 자신은 삭제할 수 없습니다".to_string(),
            ));
        }

        let deleted = self.user_repo.delete(target_id).await?;
        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        info!("사용자 삭제: target_id={}, by={}", target_id, admin_id);

        Ok(())
    }

    /// 사용자 통계 조회 (관리자 전용)
    pub async fn statistics(&self) -> Result<UserStatisticsResponse, AppError> {
        let total_users = self.user_repo.count().await?;
        let admin_users = self.user_repo.count_by_role(Role::Admin).await?;

        Ok(UserStatisticsResponse {
            total_users,
            admin_users,
            regular_users: total_users.saturating_sub(admin_users),
        })
    }
}

/// 닉네임 힌트 정규화
///
/// 공백을 제거하고, 비어 있으면 기본값으로 대체합니다.
fn nickname_base(hint: Option<&str>) -> String {
    match hint.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => DEFAULT_NICKNAME_BASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    #[test]
    fn test_nickname_base_uses_hint() {
        assert_eq!(nickname_base(Some("여행자")), "여행자");
        assert_eq!(nickname_base(Some("  홍길동  ")), "홍길동");
    }

    #[test]
    fn test_nickname_base_falls_back_to_default() {
        assert_eq!(nickname_base(None), "사용자");
        assert_eq!(nickname_base(Some("")), "사용자");
        assert_eq!(nickname_base(Some("   ")), "사용자");
    }

    fn google_user_info(provider_id: &str, name: &str) -> OAuth2UserInfo {
        OAuth2UserInfo {
            provider: AuthProvider::Google,
            id: provider_id.to_string(),
            name: Some(name.to_string()),
            email: None,
            image_url: None,
        }
    }

    #[actix_web::test]
    async fn test_find_or_create_resolves_same_identity_to_same_user() {
        let service = UserService::new(UserRepository::in_memory());

        let first = service
            .find_or_create_oauth_user(google_user_info("google-123", "여행자"))
            .await
            .unwrap();
        let second = service
            .find_or_create_oauth_user(google_user_info("google-123", "여행자"))
            .await
            .unwrap();

        // 같은 (provider, provider_id)는 항상 같은 사용자로 해석된다
        assert_eq!(first.id, second.id);
        assert_eq!(second.nickname, "여행자");
    }

    #[actix_web::test]
    async fn test_find_or_create_resolves_nickname_collision_with_suffix() {
        let service = UserService::new(UserRepository::in_memory());

        let first = service
            .find_or_create_oauth_user(google_user_info("google-1", "여행자"))
            .await
            .unwrap();
        let second = service
            .find_or_create_oauth_user(google_user_info("google-2", "여행자"))
            .await
            .unwrap();
        let third = service
            .find_or_create_oauth_user(google_user_info("google-3", "여행자"))
            .await
            .unwrap();

        assert_eq!(first.nickname, "여행자");
        assert_eq!(second.nickname, "여행자1");
        assert_eq!(third.nickname, "여행자2");
        assert_ne!(first.id, second.id);
    }
}
