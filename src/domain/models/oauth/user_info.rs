//! OAuth 사용자 속성 정규화
//!
//! 프로바이더마다 다른 모양으로 내려오는 사용자 정보 JSON을
//! 공통 형태(`OAuth2UserInfo`)로 변환합니다.
//!
//! - Google: 평면 구조 (`sub`, `name`, `email`, `picture`)
//! - Kakao: 중첩 구조 (`id`, `properties.nickname`, `properties.profile_image`,
//!   `kakao_account.email`)
//!
//! 중첩 그룹이 통째로 빠져 있어도 실패하지 않고 해당 필드를 `None`으로
//! 처리합니다. 프로바이더가 선택 동의 항목을 주지 않는 경우가 실제로 있습니다.

use serde_json::Value;
use crate::config::AuthProvider;

/// 프로바이더 사용자 정보의 공통 표현
#[derive(Debug, Clone, PartialEq)]
pub struct OAuth2UserInfo {
    /// 출처 프로바이더
    pub provider: AuthProvider,
    /// 프로바이더가 부여한 사용자 고유 ID
    pub id: String,
    /// 표시 이름 / 닉네임
    pub name: Option<String>,
    /// 이메일
    pub email: Option<String>,
    /// 프로필 이미지 URL
    pub image_url: Option<String>,
}

impl OAuth2UserInfo {
    /// 프로바이더별 속성 집합을 공통 형태로 변환합니다.
    ///
    /// # 인자
    ///
    /// * `provider` - 속성의 출처 프로바이더
    /// * `attributes` - userinfo 엔드포인트가 반환한 JSON
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuth2UserInfo)` - 고유 ID를 포함한 정규화 결과
    /// * `Err(String)` - 고유 ID 필드 자체를 찾을 수 없는 경우
    pub fn from_attributes(provider: AuthProvider, attributes: &Value) -> Result<Self, String> {
        match provider {
            AuthProvider::Google => Self::from_google(attributes),
            AuthProvider::Kakao => Self::from_kakao(attributes),
        }
    }

    fn from_google(attributes: &Value) -> Result<Self, String> {
        let id = attributes
            .get("sub")
            .and_then(Value::as_str)
            .ok_or_else(|| "Google 응답에 sub 필드가 없습니다".to_string())?;

        Ok(Self {
            provider: AuthProvider::Google,
            id: id.to_string(),
            name: string_field(attributes, "name"),
            email: string_field(attributes, "email"),
            image_url: string_field(attributes, "picture"),
        })
    }

    fn from_kakao(attributes: &Value) -> Result<Self, String> {
        // Kakao의 id는 숫자 타입으로 내려온다
        let id = match attributes.get("id") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => return Err("Kakao 응답에 id 필드가 없습니다".to_string()),
        };

        let properties = attributes.get("properties");
        let account = attributes.get("kakao_account");

        Ok(Self {
            provider: AuthProvider::Kakao,
            id,
            name: properties.and_then(|p| string_field(p, "nickname")),
            email: account.and_then(|a| string_field(a, "email")),
            image_url: properties.and_then(|p| string_field(p, "profile_image")),
        })
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_attributes() {
        let attributes = json!({
            "sub": "109876543210",
            "name": "홍길동",
            "email": "hong@gmail.com",
            "picture": "https://lh3.googleusercontent.com/photo.jpg"
        });

        let info = OAuth2UserInfo::from_attributes(AuthProvider::Google, &attributes).unwrap();
        assert_eq!(info.id, "109876543210");
        assert_eq!(info.name.as_deref(), Some("홍길동"));
        assert_eq!(info.email.as_deref(), Some("hong@gmail.com"));
        assert!(info.image_url.is_some());
    }

    #[test]
    fn test_google_without_optional_fields() {
        let attributes = json!({ "sub": "109876543210" });

        let info = OAuth2UserInfo::from_attributes(AuthProvider::Google, &attributes).unwrap();
        assert_eq!(info.id, "109876543210");
        assert!(info.name.is_none());
        assert!(info.email.is_none());
        assert!(info.image_url.is_none());
    }

    #[test]
    fn test_google_missing_sub_fails() {
        let attributes = json!({ "email": "hong@gmail.com" });
        assert!(OAuth2UserInfo::from_attributes(AuthProvider::Google, &attributes).is_err());
    }

    #[test]
    fn test_kakao_attributes() {
        let attributes = json!({
            "id": 1234567890,
            "properties": {
                "nickname": "여행자",
                "profile_image": "http://k.kakaocdn.net/img.jpg"
            },
            "kakao_account": {
                "email": "traveler@kakao.com"
            }
        });

        let info = OAuth2UserInfo::from_attributes(AuthProvider::Kakao, &attributes).unwrap();
        assert_eq!(info.id, "1234567890");
        assert_eq!(info.name.as_deref(), Some("여행자"));
        assert_eq!(info.email.as_deref(), Some("traveler@kakao.com"));
        assert_eq!(info.image_url.as_deref(), Some("http://k.kakaocdn.net/img.jpg"));
    }

    #[test]
    fn test_kakao_missing_nested_groups() {
        // 선택 동의 항목을 모두 거부한 경우 properties/kakao_account가 아예 없다
        let attributes = json!({ "id": 1234567890 });

        let info = OAuth2UserInfo::from_attributes(AuthProvider::Kakao, &attributes).unwrap();
        assert_eq!(info.id, "1234567890");
        assert!(info.name.is_none());
        assert!(info.email.is_none());
        assert!(info.image_url.is_none());
    }

    #[test]
    fn test_kakao_partial_account() {
        let attributes = json!({
            "id": 42,
            "kakao_account": { "profile_needs_agreement": true }
        });

        let info = OAuth2UserInfo::from_attributes(AuthProvider::Kakao, &attributes).unwrap();
        assert!(info.email.is_none());
    }

    #[test]
    fn test_kakao_missing_id_fails() {
        let attributes = json!({ "properties": { "nickname": "여행자" } });
        assert!(OAuth2UserInfo::from_attributes(AuthProvider::Kakao, &attributes).is_err());
    }
}
