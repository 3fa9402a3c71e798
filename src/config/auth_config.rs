//! # Authentication Configuration Module
//!
//! OAuth 프로바이더와 JWT 토큰 관련 설정을 관리하는 모듈입니다.
//! 환경 변수 기반으로 Google/Kakao OAuth 2.0 클라이언트 정보와
//! 토큰 서명/만료 정책을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//! ```
//!
//! ### Kakao OAuth 설정
//! ```bash
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export KAKAO_CLIENT_SECRET="your-kakao-client-secret"
//! export KAKAO_REDIRECT_URI="http://localhost:8080/api/v1/auth/kakao/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_TOKEN_VALIDITY_SECONDS="3600"
//! export JWT_REFRESH_TOKEN_VALIDITY_SECONDS="604800"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, JwtConfig, AuthProvider};
//!
//! let client_id = GoogleOAuthConfig::client_id();
//! let secret = JwtConfig::secret();
//! let provider = AuthProvider::from_str("kakao")?;
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google 사용자 정보 조회 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://www.googleapis.com/oauth2/v3/userinfo`
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string())
    }
}

/// Kakao OAuth 2.0 설정을 관리하는 구조체
///
/// Kakao Developers 콘솔에서 발급받은 REST API 키 기반 클라이언트 정보를 관리합니다.
/// 인증 서버(`kauth.kakao.com`)와 API 서버(`kapi.kakao.com`)의 엔드포인트가
/// 분리되어 있다는 점이 Google과 다릅니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// Kakao REST API 키(Client ID)를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("KAKAO_CLIENT_ID")
            .expect("KAKAO_CLIENT_ID must be set")
    }

    /// Kakao Client Secret을 반환합니다.
    ///
    /// Kakao 콘솔에서 보안 설정을 활성화한 경우에만 필요하며,
    /// 설정되지 않은 경우 빈 문자열을 사용합니다.
    pub fn client_secret() -> String {
        env::var("KAKAO_CLIENT_SECRET").unwrap_or_default()
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("KAKAO_REDIRECT_URI")
            .expect("KAKAO_REDIRECT_URI must be set")
    }

    /// Kakao OAuth 인증 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://kauth.kakao.com/oauth/authorize`
    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    /// Kakao OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://kauth.kakao.com/oauth/token`
    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    /// Kakao 사용자 정보 조회 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://kapi.kakao.com/v2/user/me`
    pub fn userinfo_uri() -> String {
        env::var("KAKAO_USERINFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키와 액세스/리프레시 토큰의 유효 기간 정책을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게, 리프레시 토큰은 길게
/// 3. **토큰 순환**: 리프레시 시 액세스/리프레시 토큰을 모두 재발급
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 프로덕션에서는 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰의 유효 기간을 초 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 3600초 (1시간)
    pub fn access_token_validity_seconds() -> i64 {
        env::var("JWT_ACCESS_TOKEN_VALIDITY_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }

    /// 리프레시 토큰의 유효 기간을 초 단위로 반환합니다.
    ///
    /// Redis에 저장되는 리프레시 토큰의 TTL로도 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 604800초 (7일)
    pub fn refresh_token_validity_seconds() -> i64 {
        env::var("JWT_REFRESH_TOKEN_VALIDITY_SECONDS")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604800)
    }

    /// Redis에 리프레시 토큰을 저장할 때 사용하는 키 접두사를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `refresh_token:`
    pub fn refresh_token_key_prefix() -> String {
        env::var("REFRESH_TOKEN_KEY_PREFIX")
            .unwrap_or_else(|_| "refresh_token:".to_string())
    }
}

/// 지원하는 OAuth 2.0 인증 공급자를 나타내는 열거형
///
/// 새로운 프로바이더 추가 시 이 열거형에 변형을 추가하고,
/// 해당 프로바이더의 설정 구조체와 속성 파싱을 구현하면 됩니다.
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로,
/// API 응답이나 데이터베이스 저장에 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    /// Google OAuth 2.0 인증
    Google,

    /// Kakao OAuth 2.0 인증
    Kakao,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 인증 프로바이더 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthProvider)` - 유효한 프로바이더인 경우
    /// * `Err(String)` - 지원하지 않는 프로바이더인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::AuthProvider;
    ///
    /// let provider = AuthProvider::from_str("google")?;
    /// assert_eq!(provider, AuthProvider::Google);
    ///
    /// let invalid = AuthProvider::from_str("facebook");
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "kakao" => Ok(AuthProvider::Kakao),
            _ => Err(format!("지원하지 않는 OAuth2 제공자입니다: {}", s)),
        }
    }

    /// AuthProvider를 소문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Kakao => "kakao",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("kakao").unwrap(), AuthProvider::Kakao);

        // 대소문자 무관 테스트
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("Kakao").unwrap(), AuthProvider::Kakao);

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("facebook").is_err());
        assert!(AuthProvider::from_str("naver").is_err());
    }

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Google.as_str(), "google");
        assert_eq!(AuthProvider::Kakao.as_str(), "kakao");
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        let providers = ["google", "kakao"];

        for &provider_str in &providers {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        // 데이터베이스 문서와 동일하게 대문자로 직렬화되어야 한다
        let provider = AuthProvider::Kakao;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"KAKAO\"");

        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
