//! OAuth 프로바이더 토큰 응답 모델

use serde::Deserialize;

/// OAuth 2.0 토큰 교환 응답
///
/// Google과 Kakao 모두 같은 형태의 응답을 반환하므로 공용 모델을 사용합니다.
/// 프로바이더에 따라 일부 필드가 생략될 수 있습니다.
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    /// 프로바이더 API 호출에 사용할 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (일반적으로 "bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// 액세스 토큰 만료까지 남은 초
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// 프로바이더 리프레시 토큰
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 허용된 스코프
    #[serde(default)]
    pub scope: Option<String>,
    /// OpenID Connect ID 토큰 (Google)
    #[serde(default)]
    pub id_token: Option<String>,
}
