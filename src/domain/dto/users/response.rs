use serde::Serialize;
use crate::domain::entities::users::user::User;

/// 사용자 정보 응답 DTO
///
/// 내부 연동 식별자(`provider_id`)는 노출하지 않습니다.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// 사용자 공개 ID (ObjectId hex)
    pub id: String,
    /// 이메일 (프로바이더가 제공하지 않은 경우 null)
    pub email: Option<String>,
    /// 닉네임
    pub nickname: String,
    /// 인증 프로바이더 ("google" / "kakao")
    pub provider: String,
    /// 프로필 이미지 URL
    pub profile_image_url: Option<String>,
    /// 역할 ("USER" / "ADMIN")
    pub role: String,
    /// 계정 생성 시각 (ISO 8601)
    pub created_at: String,
    /// 마지막 수정 시각 (ISO 8601)
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            nickname: user.nickname,
            provider: user.provider.as_str().to_string(),
            profile_image_url: user.profile_image_url,
            role: user.role.as_str().to_string(),
            created_at: user.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: user.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 닉네임 사용 가능 여부 응답
#[derive(Debug, Serialize)]
pub struct NicknameCheckResponse {
    pub nickname: String,
    pub available: bool,
}

/// 닉네임 추천 응답
#[derive(Debug, Serialize)]
pub struct NicknameSuggestResponse {
    pub suggestions: Vec<String>,
}

/// 사용자 통계 응답 (관리자 전용)
#[derive(Debug, Serialize)]
pub struct UserStatisticsResponse {
    /// 전체 사용자 수
    pub total_users: u64,
    /// 관리자 수
    pub admin_users: u64,
    /// 일반 사용자 수
    pub regular_users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    #[test]
    fn test_user_response_hides_provider_id() {
        let user = User::new_oauth(
            Some("a@b.com".to_string()),
            "여행자".to_string(),
            AuthProvider::Kakao,
            "secret-provider-id".to_string(),
            None,
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("secret-provider-id"));
        assert!(json.contains("\"provider\":\"kakao\""));
        assert!(json.contains("\"role\":\"USER\""));
    }
}
