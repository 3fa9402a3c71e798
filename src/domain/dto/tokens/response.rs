use serde::Serialize;

/// 토큰 발급/갱신 응답
///
/// OAuth 2.0 Bearer Token 스펙의 형태를 따릅니다.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// JWT 액세스 토큰
    pub access_token: String,
    /// JWT 리프레시 토큰
    pub refresh_token: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}

/// 토큰 유효성 확인 응답
#[derive(Debug, Serialize)]
pub struct TokenValidationResponse {
    /// 현재 요청이 인증된 상태인지 여부
    pub valid: bool,
    /// 인증된 경우 사용자 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
