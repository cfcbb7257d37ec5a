use actix_web::{get, web, HttpResponse, Responder};

use super::found;
use crate::error::AppError;
use crate::store::Catalog;

/// Lists every movie in the catalog.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Movie` objects.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: store failure.
#[get("")]
pub async fn get_movies(catalog: web::Data<dyn Catalog>) -> Result<impl Responder, AppError> {
    let movies = catalog.movies().await?;
    Ok(HttpResponse::Ok().json(movies))
}

/// Fetches one movie by its exact title.
///
/// ## Responses:
/// - `200 OK`: the `Movie`.
/// - `404 Not Found`: no movie has that title.
#[get("/{title}")]
pub async fn get_movie(
    catalog: web::Data<dyn Catalog>,
    title: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let movie = found(catalog.movie_by_title(&title).await?, "Movie", &title)?;
    Ok(HttpResponse::Ok().json(movie))
}

/// Returns only the genre embedded in the movie with the given title.
#[get("/{title}/genres")]
pub async fn get_movie_genre(
    catalog: web::Data<dyn Catalog>,
    title: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let movie = found(catalog.movie_by_title(&title).await?, "Movie", &title)?;
    Ok(HttpResponse::Ok().json(movie.genre))
}

/// Returns only the director embedded in the movie with the given title.
#[get("/{title}/directors")]
pub async fn get_movie_director(
    catalog: web::Data<dyn Catalog>,
    title: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let movie = found(catalog.movie_by_title(&title).await?, "Movie", &title)?;
    Ok(HttpResponse::Ok().json(movie.director))
}
