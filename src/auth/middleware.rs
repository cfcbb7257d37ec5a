use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::{verify_token, TokenSettings};
use crate::error::AppError;
use crate::models::User;
use crate::store::Catalog;

/// Routes reachable without a bearer token: the welcome page, registration and login.
pub fn is_public(method: &Method, path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    (*method == Method::GET && path == "/")
        || (*method == Method::POST && (path == "/user" || path == "/login"))
}

/// Requires `Authorization: Bearer <jwt>` on every non-public route.
///
/// The token subject must name an existing user; that `User` is inserted into the request
/// extensions for `AuthenticatedUser` to pick up. Expects `web::Data<TokenSettings>` and
/// `web::Data<dyn Catalog>` to be registered as app data.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        if is_public(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            match authenticate(&req).await {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                // Answer directly so the rejection is a response, not a service error.
                Err(err) => {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<User, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;

    let settings = req
        .app_data::<web::Data<TokenSettings>>()
        .ok_or_else(|| AppError::InternalServerError("TokenSettings not registered".into()))?;
    let claims = verify_token(token, settings)?;

    let catalog = req
        .app_data::<web::Data<dyn Catalog>>()
        .cloned()
        .ok_or_else(|| AppError::InternalServerError("Catalog not registered".into()))?;

    match catalog.user_by_username(&claims.sub).await? {
        Some(user) => Ok(user),
        None => {
            log::warn!("Rejected token for unknown user {:?}", claims.sub);
            Err(AppError::Unauthorized("Unknown user".into()))
        }
    }
}
