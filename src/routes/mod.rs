pub mod auth;
pub mod directors;
pub mod favorites;
pub mod genres;
pub mod index;
pub mod movies;
pub mod users;

use actix_web::web;

use crate::error::AppError;

/// Registers every route plus the extractor configs that turn malformed bodies and path
/// segments into JSON 400 responses.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(index::welcome)
    .service(auth::login)
    .service(
        web::scope("/movies")
            .service(movies::get_movies)
            .service(movies::get_movie)
            .service(movies::get_movie_genre)
            .service(movies::get_movie_director),
    )
    .service(
        web::scope("/genres")
            .service(genres::get_genres)
            .service(genres::get_genre),
    )
    .service(
        web::scope("/directors")
            .service(directors::get_directors)
            .service(directors::get_director),
    )
    .service(
        web::scope("/user")
            .service(users::get_users)
            .service(users::create_user)
            .service(users::update_user)
            .service(users::delete_current_user)
            .service(users::get_user)
            .service(users::delete_user)
            .service(favorites::get_favorites)
            .service(favorites::add_favorite)
            .service(favorites::remove_favorite),
    );
}

/// Turns an empty single-record lookup into a 404.
pub(crate) fn found<T>(record: Option<T>, kind: &str, key: &str) -> Result<T, AppError> {
    record.ok_or_else(|| AppError::NotFound(format!("{} '{}' was not found", kind, key)))
}
