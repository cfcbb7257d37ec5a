use actix_web::{delete, get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use super::found;
use crate::{auth::AuthenticatedUser, error::AppError, store::Catalog};

/// Returns the favorites list (movie ids) of the named user.
#[get("/{username}/movies")]
pub async fn get_favorites(
    catalog: web::Data<dyn Catalog>,
    username: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let user = found(catalog.user_by_username(&username).await?, "User", &username)?;
    Ok(HttpResponse::Ok().json(user.favorites))
}

/// Favorites can only be changed by their owner.
fn ensure_owner(current: &AuthenticatedUser, username: &str) -> Result<(), AppError> {
    if current.username() == username {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "{} may not change the favorites of {}",
            current.username(),
            username
        )))
    }
}

/// Appends a movie id to the authenticated user's favorites.
///
/// The id is not checked against the movie catalog and duplicates are kept.
///
/// ## Responses:
/// - `200 OK`: the updated `User`.
/// - `400 Bad Request`: `movie_id` is not a UUID.
/// - `403 Forbidden`: `username` is not the authenticated user.
#[post("/{username}/movies/{movie_id}")]
pub async fn add_favorite(
    catalog: web::Data<dyn Catalog>,
    current: AuthenticatedUser,
    path: web::Path<(String, Uuid)>,
) -> Result<impl Responder, AppError> {
    let (username, movie_id) = path.into_inner();
    ensure_owner(&current, &username)?;

    let updated = catalog.push_favorite(&username, movie_id).await?;
    let user = found(updated, "User", &username)?;
    Ok(HttpResponse::Ok().json(user))
}

/// Removes every occurrence of a movie id from the authenticated user's favorites.
#[delete("/{username}/movies/{movie_id}")]
pub async fn remove_favorite(
    catalog: web::Data<dyn Catalog>,
    current: AuthenticatedUser,
    path: web::Path<(String, Uuid)>,
) -> Result<impl Responder, AppError> {
    let (username, movie_id) = path.into_inner();
    ensure_owner(&current, &username)?;

    let updated = catalog.pull_favorite(&username, movie_id).await?;
    let user = found(updated, "User", &username)?;
    Ok(HttpResponse::Ok().json(user))
}
