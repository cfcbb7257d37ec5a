use actix_web::{get, web, HttpResponse, Responder};

use super::found;
use crate::error::AppError;
use crate::store::Catalog;

#[get("")]
pub async fn get_directors(catalog: web::Data<dyn Catalog>) -> Result<impl Responder, AppError> {
    let directors = catalog.directors().await?;
    Ok(HttpResponse::Ok().json(directors))
}

/// Fetches one director by name; `404` if none matches.
#[get("/{name}")]
pub async fn get_director(
    catalog: web::Data<dyn Catalog>,
    name: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let director = found(catalog.director_by_name(&name).await?, "Director", &name)?;
    Ok(HttpResponse::Ok().json(director))
}
