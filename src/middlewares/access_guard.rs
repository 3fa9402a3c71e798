//! 접근 제어 게이트 미들웨어
//!
//! 보호가 필요한 스코프에 걸어 인증/권한을 강제합니다.
//! 신원 해석은 [`crate::middlewares::auth_middleware::AuthMiddleware`]가
//! 이미 끝낸 상태이므로, 여기서는 request extension의
//! [`AuthenticatedUser`] 존재 여부와 역할만 검사합니다.
//!
//! # 응답 규약
//!
//! - 신원 없음: `401` + `{"success":false,"message":"인증이 필요합니다.","code":"UNAUTHORIZED","timestamp":...}`
//! - 역할 부족: `403` + `{"success":false,"message":"접근 권한이 없습니다.","code":"FORBIDDEN","timestamp":...}`

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, HttpMessage, HttpResponse, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use log::warn;

use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 접근 제어 게이트
///
/// ```rust,ignore
/// web::scope("/admin").wrap(AccessGuard::role(Role::Admin))
/// web::scope("/users/me").wrap(AccessGuard::authenticated())
/// ```
pub struct AccessGuard {
    required_role: Option<Role>,
}

impl AccessGuard {
    /// 인증된 사용자면 누구나 허용
    pub fn authenticated() -> Self {
        Self {
            required_role: None,
        }
    }

    /// 특정 역할을 가진 사용자만 허용
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGuardService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

/// 실제 접근 검사를 수행하는 서비스
pub struct AccessGuardService<S> {
    service: Rc<S>,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for AccessGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        let user = req.extensions().get::<AuthenticatedUser>().cloned();

        Box::pin(async move {
            let user = match user {
                Some(user) => user,
                None => {
                    warn!("인증되지 않은 접근 차단: {}", req.path());
                    let response = unauthorized_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            if let Some(required) = required_role {
                if !user.has_role(required) {
                    warn!(
                        "권한 부족: user_id={}, 필요 역할={}",
                        user.user_id,
                        required.as_str()
                    );
                    let response = forbidden_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "success": false,
        "message": "인증이 필요합니다.",
        "code": "UNAUTHORIZED",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

fn forbidden_response() -> HttpResponse {
    HttpResponse::Forbidden().json(serde_json::json!({
        "success": false,
        "message": "접근 권한이 없습니다.",
        "code": "FORBIDDEN",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::auth_middleware::AuthMiddleware;
    use crate::services::auth::token_provider::JwtTokenProvider;
    use actix_web::{App, test, web};

    fn provider() -> JwtTokenProvider {
        JwtTokenProvider::new("test-secret-key", 3600, 604800)
    }

    async fn protected() -> HttpResponse {
        HttpResponse::Ok().body("ok")
    }

    fn protected_app(
        guard: AccessGuard,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl actix_web::body::MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(AuthMiddleware::new(provider()))
            .service(
                web::scope("/protected")
                    .wrap(guard)
                    .route("", web::get().to(protected)),
            )
    }

    #[actix_web::test]
    async fn test_rejects_anonymous_with_401_payload() {
        let app = test::init_service(protected_app(AccessGuard::authenticated())).await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert_eq!(body["message"], "인증이 필요합니다.");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_allows_authenticated_user() {
        let token = provider()
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let app = test::init_service(protected_app(AccessGuard::authenticated())).await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_role_guard_rejects_plain_user_with_403() {
        let token = provider()
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let app = test::init_service(protected_app(AccessGuard::role(Role::Admin))).await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_role_guard_allows_admin() {
        let token = provider()
            .create_access_token("507f1f77bcf86cd799439011", Role::Admin)
            .unwrap();

        let app = test::init_service(protected_app(AccessGuard::role(Role::Admin))).await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
