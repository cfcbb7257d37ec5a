use crate::{
    auth::{generate_token, verify_password, AuthResponse, LoginRequest, TokenSettings},
    error::AppError,
    store::Catalog,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login user
///
/// Checks `Username` and `Password` (query string or JSON body) and returns the user
/// together with a signed bearer token.
///
/// ## Responses:
/// - `200 OK`: `{"user": User, "token": "<jwt>"}`.
/// - `400 Bad Request`: a credential is missing.
/// - `401 Unauthorized`: unknown username or wrong password.
#[post("/login")]
pub async fn login(
    catalog: web::Data<dyn Catalog>,
    settings: web::Data<TokenSettings>,
    query: web::Query<LoginRequest>,
    body: Option<web::Json<LoginRequest>>,
) -> Result<impl Responder, AppError> {
    let credentials = match body {
        Some(body) => query.into_inner().or(body.into_inner()),
        None => query.into_inner(),
    };
    let (username, password) = match (credentials.username, credentials.password) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(AppError::BadRequest("Missing credentials".into())),
    };

    let user = match catalog.user_by_username(&username).await? {
        Some(user) => user,
        None => return Err(AppError::Unauthorized("Incorrect username or password.".into())),
    };

    let hash = user.password.clone();
    if !web::block(move || verify_password(&password, &hash)).await?? {
        log::warn!("Failed login for {}", username);
        return Err(AppError::Unauthorized("Incorrect username or password.".into()));
    }

    let token = generate_token(&user.username, &settings)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user, token }))
}
