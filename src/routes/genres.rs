use actix_web::{get, web, HttpResponse, Responder};

use super::found;
use crate::error::AppError;
use crate::store::Catalog;

#[get("")]
pub async fn get_genres(catalog: web::Data<dyn Catalog>) -> Result<impl Responder, AppError> {
    let genres = catalog.genres().await?;
    Ok(HttpResponse::Ok().json(genres))
}

/// Fetches one genre by name; `404` if none matches.
#[get("/{name}")]
pub async fn get_genre(
    catalog: web::Data<dyn Catalog>,
    name: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let genre = found(catalog.genre_by_name(&name).await?, "Genre", &name)?;
    Ok(HttpResponse::Ok().json(genre))
}
