//! JWT 인증 필터 미들웨어
//!
//! 모든 요청에서 Authorization 헤더의 Bearer 토큰을 검증하고,
//! 성공하면 [`AuthenticatedUser`]를 request extension에 저장합니다.
//!
//! 이 필터는 요청을 절대 거부하지 않습니다. 토큰이 없거나 유효하지
//! 않으면 신원 없이 통과시키고, 접근 거부는 보호 스코프에 걸린
//! [`crate::middlewares::access_guard::AccessGuard`]가 담당합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, HttpMessage, Result,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use log::debug;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::token_provider::{JwtTokenProvider, extract_bearer_token};

/// JWT 인증 필터
///
/// 앱 전역에 한 번 등록합니다:
///
/// ```rust,ignore
/// App::new().wrap(AuthMiddleware::new(token_provider.clone()))
/// ```
pub struct AuthMiddleware {
    token_provider: JwtTokenProvider,
}

impl AuthMiddleware {
    pub fn new(token_provider: JwtTokenProvider) -> Self {
        Self { token_provider }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_provider: self.token_provider.clone(),
        }))
    }
}

/// 실제 토큰 검증을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    token_provider: JwtTokenProvider,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        if let Some(user) = resolve_user(&req, &self.token_provider) {
            debug!("인증 성공: user_id={}", user.user_id);
            req.extensions_mut().insert(user);
        }

        Box::pin(async move { service.call(req).await })
    }
}

/// 요청 헤더의 토큰을 검증해 사용자 신원을 해석
///
/// 헤더가 없거나 토큰이 유효하지 않으면 None을 반환할 뿐,
/// 에러를 내지 않습니다.
fn resolve_user(req: &ServiceRequest, provider: &JwtTokenProvider) -> Option<AuthenticatedUser> {
    let auth_header = req.headers().get("Authorization")?.to_str().ok()?;
    let token = extract_bearer_token(auth_header)?;

    match provider.validate(token) {
        Ok(claims) => Some(AuthenticatedUser {
            user_id: claims.sub,
            role: claims.role,
        }),
        Err(_) => {
            debug!("토큰 검증 실패, 신원 없이 통과");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::Role;
    use crate::domain::models::auth::authenticated_user::OptionalUser;
    use actix_web::{App, HttpResponse, test, web};

    fn provider() -> JwtTokenProvider {
        JwtTokenProvider::new("test-secret-key", 3600, 604800)
    }

    async fn whoami(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_valid_token_resolves_identity() {
        let provider = provider();
        let token = provider
            .create_access_token("507f1f77bcf86cd799439011", Role::User)
            .unwrap();

        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(provider))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "507f1f77bcf86cd799439011".as_bytes());
    }

    #[actix_web::test]
    async fn test_missing_token_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(provider()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "anonymous".as_bytes());
    }

    #[actix_web::test]
    async fn test_invalid_token_passes_through_without_identity() {
        // 필터는 절대 요청을 거부하지 않는다
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(provider()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer garbage.token.value"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "anonymous".as_bytes());
    }
}
