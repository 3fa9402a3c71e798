//! # OAuth 2.0 소셜 로그인 서비스
//!
//! Google/Kakao OAuth 2.0 Authorization Code Grant 플로우를 구현합니다.
//! 두 제공자의 엔드포인트와 응답 형태 차이는 이 모듈 안에서 흡수되며,
//! 바깥 계층은 항상 정규화된 [`OAuth2UserInfo`]만 다룹니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 클라이언트                 우리 서버                      OAuth 제공자
//!     │  1. 로그인 URL 요청      │                               │
//!     ├─────────────────────────►│                               │
//!     │  2. 인증 페이지 URL       │                               │
//!     │◄─────────────────────────┤                               │
//!     │  3. 사용자 인증                                           │
//!     ├──────────────────────────────────────────────────────────►│
//!     │  4. code와 함께 콜백      │                               │
//!     ├─────────────────────────►│  5. code → access_token 교환  │
//!     │                          ├──────────────────────────────►│
//!     │                          │  6. 사용자 정보 조회            │
//!     │                          ├──────────────────────────────►│
//!     │  7. JWT 토큰 발급         │                               │
//!     │◄─────────────────────────┤                               │
//! ```

use log::info;

use crate::{
    config::{AuthProvider, GoogleOAuthConfig, KakaoOAuthConfig},
    domain::models::oauth::{token_response::OAuthTokenResponse, user_info::OAuth2UserInfo},
    errors::errors::AppError,
};

/// OAuth 로그인 URL 응답
#[derive(Debug, serde::Serialize)]
pub struct OAuthLoginUrlResponse {
    /// 제공자 인증 페이지로의 리다이렉트 URL
    pub login_url: String,
    /// CSRF 방지용 state 값
    pub state: String,
}

/// 제공자별 OAuth 엔드포인트/자격 증명 묶음
struct ProviderEndpoints {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_uri: String,
    token_uri: String,
    userinfo_uri: String,
    /// 인가 요청에 실을 scope (제공자가 요구할 때만)
    scope: Option<&'static str>,
}

impl ProviderEndpoints {
    fn for_provider(provider: AuthProvider) -> Self {
        match provider {
            AuthProvider::Google => Self {
                client_id: GoogleOAuthConfig::client_id(),
                client_secret: GoogleOAuthConfig::client_secret(),
                redirect_uri: GoogleOAuthConfig::redirect_uri(),
                auth_uri: GoogleOAuthConfig::auth_uri(),
                token_uri: GoogleOAuthConfig::token_uri(),
                userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
                scope: Some("openid email profile"),
            },
            AuthProvider::Kakao => Self {
                client_id: KakaoOAuthConfig::client_id(),
                client_secret: KakaoOAuthConfig::client_secret(),
                redirect_uri: KakaoOAuthConfig::redirect_uri(),
                auth_uri: KakaoOAuthConfig::auth_uri(),
                token_uri: KakaoOAuthConfig::token_uri(),
                userinfo_uri: KakaoOAuthConfig::userinfo_uri(),
                scope: None,
            },
        }
    }
}

/// OAuth 2.0 소셜 로그인 서비스
///
/// 로그인 URL 생성, Authorization Code 교환, 사용자 정보 조회를 담당합니다.
/// HTTP 클라이언트는 커넥션 풀을 공유하도록 한 번만 생성합니다.
#[derive(Clone)]
pub struct OAuthService {
    http: reqwest::Client,
}

impl OAuthService {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// 제공자 인증 페이지로의 로그인 URL 생성
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// {auth_uri}?client_id=...&redirect_uri=...&response_type=code&state=...
    /// ```
    ///
    /// Google은 `scope=openid email profile`이 추가됩니다.
    pub fn build_login_url(&self, provider: AuthProvider) -> Result<OAuthLoginUrlResponse, AppError> {
        let endpoints = ProviderEndpoints::for_provider(provider);
        let state = generate_oauth_state()?;

        let mut params = vec![
            ("client_id", endpoints.client_id),
            ("redirect_uri", endpoints.redirect_uri),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        if let Some(scope) = endpoints.scope {
            params.push(("scope", scope.to_string()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", endpoints.auth_uri, query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 콜백으로 받은 code/state를 검증하고 정규화된 사용자 정보 반환
    ///
    /// # 처리 단계
    ///
    /// 1. state 검증
    /// 2. Authorization Code → Access Token 교환
    /// 3. 제공자 사용자 정보 조회 및 정규화
    pub async fn authenticate(
        &self,
        provider: AuthProvider,
        code: &str,
        state: &str,
    ) -> Result<OAuth2UserInfo, AppError> {
        verify_oauth_state(state)?;

        let token = self.exchange_code_for_token(provider, code).await?;
        let user_info = self.fetch_user_info(provider, &token.access_token).await?;

        info!(
            "{} OAuth 인증 성공: provider_id={}",
            provider.as_str(),
            user_info.id
        );

        Ok(user_info)
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST {token_uri}
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&code=...&client_id=...&client_secret=...&redirect_uri=...
    /// ```
    async fn exchange_code_for_token(
        &self,
        provider: AuthProvider,
        code: &str,
    ) -> Result<OAuthTokenResponse, AppError> {
        let endpoints = ProviderEndpoints::for_provider(provider);

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", &endpoints.client_id),
            ("client_secret", &endpoints.client_secret),
            ("redirect_uri", &endpoints.redirect_uri),
        ];

        let response = self
            .http
            .post(&endpoints.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "{} 토큰 요청 실패: {}",
                    provider.as_str(),
                    e
                ))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패: {}",
                provider.as_str(),
                error_text
            )));
        }

        response.json::<OAuthTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "{} 토큰 응답 파싱 실패: {}",
                provider.as_str(),
                e
            ))
        })
    }

    /// Access Token으로 제공자 사용자 정보 조회
    ///
    /// 응답 JSON의 형태는 제공자마다 다르므로(Google은 평면 구조,
    /// Kakao는 중첩 구조) 정규화는 [`OAuth2UserInfo::from_attributes`]에
    /// 위임합니다.
    async fn fetch_user_info(
        &self,
        provider: AuthProvider,
        access_token: &str,
    ) -> Result<OAuth2UserInfo, AppError> {
        let endpoints = ProviderEndpoints::for_provider(provider);

        let response = self
            .http
            .get(&endpoints.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "{} 사용자 정보 요청 실패: {}",
                    provider.as_str(),
                    e
                ))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패: {}",
                provider.as_str(),
                error_text
            )));
        }

        let attributes = response.json::<serde_json::Value>().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "{} 사용자 정보 파싱 실패: {}",
                provider.as_str(),
                e
            ))
        })?;

        OAuth2UserInfo::from_attributes(provider, &attributes)
            .map_err(AppError::ExternalServiceError)
    }
}

impl Default for OAuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// CSRF 방지용 OAuth state 값 생성
///
/// 타임스탬프와 서버 비밀키를 해시하여 예측 불가능한 값을 만듭니다.
fn generate_oauth_state() -> Result<String, AppError> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
        .as_nanos();

    let state_data = format!("{}:{}", timestamp, crate::config::JwtConfig::secret());

    let mut hasher = DefaultHasher::new();
    state_data.hash(&mut hasher);

    Ok(format!("{:x}", hasher.finish()))
}

/// 콜백 state 검증
///
/// 빈 state는 즉시 거부합니다.
fn verify_oauth_state(state: &str) -> Result<(), AppError> {
    if state.trim().is_empty() {
        return Err(AppError::AuthenticationError(
            "유효하지 않은 OAuth state".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_oauth_state_not_empty() {
        let state = generate_oauth_state().unwrap();
        assert!(!state.is_empty());
    }

    #[test]
    fn test_verify_oauth_state() {
        assert!(verify_oauth_state("a1b2c3").is_ok());
        assert!(verify_oauth_state("").is_err());
        assert!(verify_oauth_state("   ").is_err());
    }

    #[test]
    fn test_kakao_endpoints_have_no_scope() {
        // Kakao는 동의 항목을 콘솔에서 관리하므로 scope를 싣지 않는다
        unsafe {
            std::env::set_var("KAKAO_CLIENT_ID", "test-kakao-id");
            std::env::set_var("KAKAO_REDIRECT_URI", "http://localhost/callback");
        }

        let endpoints = ProviderEndpoints::for_provider(AuthProvider::Kakao);
        assert!(endpoints.scope.is_none());
        assert!(endpoints.auth_uri.contains("kauth.kakao.com"));
        assert!(endpoints.userinfo_uri.contains("kapi.kakao.com"));
    }
}
