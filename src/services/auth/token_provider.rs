//! JWT 토큰 발급/검증 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 JWT 액세스/리프레시 토큰을 담당합니다.
//! 서명 키는 생성 시점에 한 번만 만들어 재사용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    domain::entities::users::user::Role,
    errors::errors::AppError,
};

/// JWT 클레임
///
/// `sub`는 사용자 ObjectId의 16진수 문자열입니다.
/// 리프레시 토큰은 역할 정보를 싣지 않으므로 `role`은 선택적입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 사용자 역할 (액세스 토큰에만 존재)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// 토큰 고유 식별자 (리프레시 토큰에만 존재)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 발급/검증 서비스
///
/// 액세스 토큰(기본 1시간)과 리프레시 토큰(기본 7일)을 지원합니다.
/// 만료 판정은 유예 시간 없이 정확한 시각을 기준으로 합니다.
#[derive(Clone)]
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_validity_seconds: i64,
    refresh_validity_seconds: i64,
}

impl JwtTokenProvider {
    /// 환경 변수(`JWT_SECRET` 등)에서 설정을 읽어 생성합니다.
    pub fn from_env() -> Self {
        Self::new(
            &JwtConfig::secret(),
            JwtConfig::access_token_validity_seconds(),
            JwtConfig::refresh_token_validity_seconds(),
        )
    }

    /// 주어진 비밀키와 유효기간으로 생성합니다.
    pub fn new(secret: &str, access_validity_seconds: i64, refresh_validity_seconds: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_validity_seconds,
            refresh_validity_seconds,
        }
    }

    /// 액세스 토큰 유효기간 (초)
    ///
    /// 토큰 응답의 `expires_in` 필드에 그대로 사용됩니다.
    pub fn access_token_validity_seconds(&self) -> i64 {
        self.access_validity_seconds
    }

    /// 액세스 토큰 생성
    ///
    /// # 인자
    ///
    /// * `user_id` - 사용자 ObjectId 문자열
    /// * `role` - 토큰에 실을 사용자 역할
    pub fn create_access_token(&self, user_id: &str, role: Role) -> Result<String, AppError> {
        self.create_token(user_id, Some(role), None, self.access_validity_seconds)
    }

    /// 리프레시 토큰 생성
    ///
    /// 역할 클레임 없이 발급되며, 갱신 시점에 사용자 레코드에서
    /// 최신 역할을 다시 읽습니다. 같은 초에 연속 발급해도 토큰이
    /// 구분되도록 고유 식별자(jti)를 싣습니다.
    pub fn create_refresh_token(&self, user_id: &str) -> Result<String, AppError> {
        let jti = ObjectId::new().to_hex();
        self.create_token(user_id, None, Some(jti), self.refresh_validity_seconds)
    }

    fn create_token(
        &self,
        user_id: &str,
        role: Option<Role>,
        jti: Option<String>,
        validity_seconds: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(validity_seconds);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            role,
            jti,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료, 서명 불일치, 형식 오류 등 모든 검증 실패는
    /// 원인을 구분하지 않고 `InvalidToken`으로 수렴합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임
    /// * `Err(AppError::InvalidToken)` - 검증 실패
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| {
                AppError::InvalidToken("유효하지 않거나 만료된 토큰입니다".to_string())
            })
    }

}

/// Authorization 헤더에서 Bearer 토큰 부분 추출
///
/// "Bearer {token}" 형식이 아니면 None을 반환합니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> JwtTokenProvider {
        JwtTokenProvider::new("test-secret-key", 3600, 604800)
    }

    #[test]
    fn test_access_token_roundtrip() {
        let provider = provider();
        let token = provider
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let claims = provider.validate(&token).unwrap();
        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.role, Some(Role::User));
        assert_eq!(claims.jti, None);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_refresh_token_has_no_role() {
        let provider = provider();
        let token = provider
            .create_refresh_token("507f1f77bcf86cd799439011")
            .unwrap();

        let claims = provider.validate(&token).unwrap();
        assert_eq!(claims.role, None);
        assert!(claims.jti.is_some());
    }

    #[test]
    fn test_refresh_tokens_are_distinct() {
        // 같은 사용자에게 같은 초에 발급해도 jti 덕분에 값이 다르다
        let provider = provider();
        let first = provider.create_refresh_token("507f1f77bcf86cd799439011").unwrap();
        let second = provider.create_refresh_token("507f1f77bcf86cd799439011").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_expired_token_rejected() {
        // 이미 만료된 토큰 생성
        let expired = JwtTokenProvider::new("test-secret-key", -10, -10);
        let token = expired
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let result = expired.validate(&token);
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = provider()
            .create_access_token("507f1f77bcf86cd799439011", Role::Admin)
            .unwrap();

        let other = JwtTokenProvider::new("another-secret", 3600, 604800);
        assert!(matches!(
            other.validate(&token),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let provider = provider();
        assert!(matches!(
            provider.validate("not.a.jwt"),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(
            provider.validate(""),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
    }
}
