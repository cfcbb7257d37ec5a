use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use super::found;
use crate::{
    auth::{hash_password, AuthenticatedUser},
    error::AppError,
    models::UserInput,
    store::Catalog,
};

/// Lists every registered user. Password hashes are never included.
#[get("")]
pub async fn get_users(catalog: web::Data<dyn Catalog>) -> Result<impl Responder, AppError> {
    let users = catalog.users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Fetches one user by username.
///
/// ## Responses:
/// - `200 OK`: the `User`.
/// - `404 Not Found`: no user has that username.
#[get("/{username}")]
pub async fn get_user(
    catalog: web::Data<dyn Catalog>,
    username: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let user = found(catalog.user_by_username(&username).await?, "User", &username)?;
    Ok(HttpResponse::Ok().json(user))
}

/// Registers a new user.
///
/// ## Request Body:
/// `{"Username", "Password", "Email", "Birthday"}`; `Birthday` is optional.
///
/// ## Responses:
/// - `201 Created`: the stored `User`.
/// - `400 Bad Request`: the username is already taken.
/// - `422 Unprocessable Entity`: field validation failed; body lists each failure.
#[post("")]
pub async fn create_user(
    catalog: web::Data<dyn Catalog>,
    input: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let input = input.into_inner();

    if catalog.user_by_username(&input.username).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "{} already exists",
            input.username
        )));
    }

    let password = input.password.clone();
    let password_hash = web::block(move || hash_password(&password)).await??;
    let user = catalog
        .create_user(input.into_new_user(password_hash))
        .await?;

    log::info!("Registered user {}", user.username);
    Ok(HttpResponse::Created().json(user))
}

/// Replaces every field of the authenticated user's record except favorites.
///
/// The new password is hashed before it is stored. Renaming to a username that another
/// user already holds is rejected with `400`. Tokens name their user, so a rename
/// invalidates tokens issued under the old username.
#[put("")]
pub async fn update_user(
    catalog: web::Data<dyn Catalog>,
    current: AuthenticatedUser,
    input: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let input = input.into_inner();

    if input.username != current.username()
        && catalog.user_by_username(&input.username).await?.is_some()
    {
        return Err(AppError::BadRequest(format!(
            "{} already exists",
            input.username
        )));
    }

    let password = input.password.clone();
    let password_hash = web::block(move || hash_password(&password)).await??;
    let updated = catalog
        .update_user(current.username(), input.into_new_user(password_hash))
        .await?;
    let user = found(updated, "User", current.username())?;

    Ok(HttpResponse::Ok().json(user))
}

/// Deletes the authenticated user.
///
/// ## Responses:
/// - `200 OK`: plain-text confirmation.
/// - `400 Bad Request`: the user no longer exists.
#[delete("")]
pub async fn delete_current_user(
    catalog: web::Data<dyn Catalog>,
    current: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    delete_by_username(catalog.get_ref(), current.username()).await
}

/// Deletes the named user, which must be the authenticated user.
///
/// ## Responses:
/// - `200 OK`: plain-text confirmation.
/// - `400 Bad Request`: no user has that username.
/// - `403 Forbidden`: the named user is someone else.
#[delete("/{username}")]
pub async fn delete_user(
    catalog: web::Data<dyn Catalog>,
    current: AuthenticatedUser,
    username: web::Path<String>,
) -> Result<impl Responder, AppError> {
    if current.username() != username.as_str() {
        if catalog.user_by_username(&username).await?.is_none() {
            return Err(AppError::BadRequest(format!("{} was not found", username)));
        }
        return Err(AppError::Forbidden(format!(
            "{} may not delete {}",
            current.username(),
            username
        )));
    }
    delete_by_username(catalog.get_ref(), &username).await
}

async fn delete_by_username(catalog: &dyn Catalog, username: &str) -> Result<HttpResponse, AppError> {
    match catalog.delete_user(username).await? {
        Some(user) => {
            log::info!("Deleted user {}", user.username);
            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format!("{} was deleted.", user.username)))
        }
        None => Err(AppError::BadRequest(format!("{} was not found", username))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCatalog;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_create_user_validation_and_duplicates() {
        let catalog: Arc<dyn Catalog> = Arc::new(MemoryCatalog::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(catalog.clone()))
                .service(web::scope("/user").service(create_user)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"Username": "abcd", "Password": "popcorn", "Email": "a@b.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = json!({"Username": "moviefan", "Password": "popcorn", "Email": "a@b.com"});
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(catalog.users().await.unwrap().len(), 1);
    }
}
