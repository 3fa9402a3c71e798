use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::Role;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 필터가 토큰 검증에 성공하면 요청 확장에 삽입합니다.
/// 리프레시 토큰에는 role 클레임이 없으므로 `role`은 `Option`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex 문자열)
    pub user_id: String,

    /// 사용자 역할 (액세스 토큰에만 존재)
    pub role: Option<Role>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => {
                // 보호 엔드포인트의 401 응답 규약
                let response = actix_web::HttpResponse::Unauthorized().json(serde_json::json!({
                    "success": false,
                    "message": "인증이 필요합니다.",
                    "code": "UNAUTHORIZED",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }));
                ready(Err(actix_web::error::InternalError::from_response(
                    "인증이 필요합니다.",
                    response,
                )
                .into()))
            }
        }
    }
}

/// 선택적 인증 사용자 추출자
///
/// 공개 엔드포인트에서 로그인 여부에 따라 응답을 달리할 때 사용합니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_checks() {
        let admin = AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            role: Some(Role::Admin),
        };
        assert!(admin.is_admin());
        assert!(admin.has_role(Role::Admin));
        assert!(!admin.has_role(Role::User));

        let refresh_context = AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            role: None,
        };
        assert!(!refresh_context.is_admin());
        assert!(!refresh_context.has_role(Role::User));
    }
}
