//! # Data access
//!
//! The `Catalog` trait is the single seam between route handlers and storage. Every
//! handler performs exactly one `Catalog` call; no operation spans more than one record.
//!
//! Lookups return `Ok(None)` when nothing matches, leaving the HTTP meaning of a miss
//! to the caller. `update_user`, `delete_user`, `push_favorite` and `pull_favorite`
//! follow find-one-and-modify semantics: they return the record after (or, for deletion,
//! as of) the change, or `None` if no user had the given username.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Director, Genre, Movie, NewUser, User};

pub use memory::MemoryCatalog;
pub use postgres::PgCatalog;

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn movies(&self) -> Result<Vec<Movie>, AppError>;
    async fn movie_by_title(&self, title: &str) -> Result<Option<Movie>, AppError>;

    async fn genres(&self) -> Result<Vec<Genre>, AppError>;
    async fn genre_by_name(&self, name: &str) -> Result<Option<Genre>, AppError>;

    async fn directors(&self) -> Result<Vec<Director>, AppError>;
    async fn director_by_name(&self, name: &str) -> Result<Option<Director>, AppError>;

    async fn users(&self) -> Result<Vec<User>, AppError>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;

    /// Overwrites every field of the user named `username` except favorites.
    async fn update_user(&self, username: &str, update: NewUser)
        -> Result<Option<User>, AppError>;

    async fn delete_user(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Appends `movie_id` to the user's favorites. Duplicates are kept.
    async fn push_favorite(&self, username: &str, movie_id: Uuid)
        -> Result<Option<User>, AppError>;

    /// Removes every occurrence of `movie_id` from the user's favorites.
    async fn pull_favorite(&self, username: &str, movie_id: Uuid)
        -> Result<Option<User>, AppError>;
}
