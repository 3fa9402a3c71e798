//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 모든 사용자는 OAuth 프로바이더(Google/Kakao)를 통해 생성되며,
//! `(provider, provider_id)` 쌍이 외부 신원과의 연결 고리입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 역할
///
/// 데이터베이스와 JWT의 `role` 클레임에 대문자 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 문자열에서 Role을 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("유효하지 않은 역할입니다: {}", s)),
        }
    }

    /// Role을 대문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// ## 유일성 제약
///
/// - `nickname`: 전역 유일
/// - `(provider, provider_id)`: 전역 유일
/// - `email`: 값이 있는 문서들 사이에서만 유일 (프로바이더가 이메일을
///   제공하지 않는 경우 `None`으로 저장)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (프로바이더가 제공하지 않으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 닉네임 (unique)
    pub nickname: String,
    /// 인증 프로바이더
    pub provider: AuthProvider,
    /// 프로바이더가 부여한 사용자 고유 ID
    pub provider_id: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 사용자 역할
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더를 통해 처음 로그인한 사용자를 생성합니다.
    /// 역할은 항상 `Role::User`로 시작합니다.
    pub fn new_oauth(
        email: Option<String>,
        nickname: String,
        provider: AuthProvider,
        provider_id: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            provider,
            provider_id,
            profile_image_url,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    ///
    /// JWT의 subject 클레임과 API 응답에서 사용하는 24자리 hex 표현입니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 관리자 여부 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_string() {
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    }

    #[test]
    fn test_new_oauth_user_defaults() {
        let user = User::new_oauth(
            None,
            "사용자1".to_string(),
            AuthProvider::Kakao,
            "12345".to_string(),
            None,
        );

        assert_eq!(user.role, Role::User);
        assert!(user.email.is_none());
        assert!(user.id.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_id_string_roundtrip() {
        let mut user = User::new_oauth(
            Some("a@b.com".to_string()),
            "닉네임".to_string(),
            AuthProvider::Google,
            "sub-1".to_string(),
            None,
        );
        assert!(user.id_string().is_none());

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string().unwrap(), oid.to_hex());
    }
}
