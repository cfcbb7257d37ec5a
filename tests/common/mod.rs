#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::{header, StatusCode},
    middleware::Logger,
    test, web, App,
};
use myflix::{
    auth::{AuthMiddleware, AuthResponse, TokenSettings},
    cors::cors,
    models::User,
    routes,
    store::{seed, Catalog, MemoryCatalog},
};
use serde_json::json;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ORIGIN: &str = "http://localhost:4200";

pub fn token_settings() -> TokenSettings {
    TokenSettings::new(TEST_SECRET, 1)
}

pub fn empty_catalog() -> Arc<MemoryCatalog> {
    Arc::new(MemoryCatalog::new())
}

pub fn demo_catalog() -> Arc<MemoryCatalog> {
    Arc::new(seed::demo_catalog().expect("demo catalog"))
}

/// Builds the full application (auth, CORS, logging, all routes) over `catalog`.
pub async fn init_app(
    catalog: Arc<MemoryCatalog>,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    let catalog: Arc<dyn Catalog> = catalog;
    test::init_service(
        App::new()
            .app_data(web::Data::from(catalog))
            .app_data(web::Data::new(token_settings()))
            .wrap(AuthMiddleware)
            .wrap(cors(&[TEST_ORIGIN.to_string()]))
            .wrap(Logger::default())
            .configure(routes::config),
    )
    .await
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn register(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> User {
    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({
            "Username": username,
            "Password": password,
            "Email": format!("{}@example.com", username),
            "Birthday": "1990-05-17"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Registration failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("Failed to parse registration response")
}

pub async fn login(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> String {
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "Username": username, "Password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "Login failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );
    let auth: AuthResponse = serde_json::from_slice(&body).expect("Failed to parse login response");
    auth.token
}

/// Registers `username` and returns a bearer token for it.
pub async fn register_and_login(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> String {
    register(app, username, password).await;
    login(app, username, password).await
}
