use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Catalog;
use crate::error::AppError;
use crate::models::movie::MovieRow;
use crate::models::{Director, Genre, Movie, NewUser, User};

const MOVIE_COLUMNS: &str = "id, title, description, genre_name, genre_description, \
     director_name, director_bio, actors, image_path, featured";

const USER_COLUMNS: &str = "id, username, password_hash, email, birthday, favorites";

/// PostgreSQL-backed catalog.
///
/// Each user mutation is a single `UPDATE ... RETURNING` or `DELETE ... RETURNING`
/// statement, so a concurrent writer can never observe a half-applied change.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Applies the migrations under `migrations/`.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))
    }
}

/// A write that trips the `users.username` unique index is a duplicate username.
fn username_conflict(error: sqlx::Error, username: &str) -> AppError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::BadRequest(format!("{} already exists", username))
        }
        _ => error.into(),
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies ORDER BY title",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn movie_by_title(&self, title: &str) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies WHERE title = $1 LIMIT 1",
            MOVIE_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn genres(&self) -> Result<Vec<Genre>, AppError> {
        let genres =
            sqlx::query_as::<_, Genre>("SELECT id, name, description FROM genres ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(genres)
    }

    async fn genre_by_name(&self, name: &str) -> Result<Option<Genre>, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name, description FROM genres WHERE name = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    async fn directors(&self) -> Result<Vec<Director>, AppError> {
        let directors = sqlx::query_as::<_, Director>(
            "SELECT id, name, bio, birth, death FROM directors ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(directors)
    }

    async fn director_by_name(&self, name: &str) -> Result<Option<Director>, AppError> {
        let director = sqlx::query_as::<_, Director>(
            "SELECT id, name, bio, birth, death FROM directors WHERE name = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(director)
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY username",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = User::create(user);
        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, username, password_hash, email, birthday, favorites) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .bind(user.birthday)
        .bind(&user.favorites)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| username_conflict(e, &user.username))?;
        Ok(created)
    }

    async fn update_user(
        &self,
        username: &str,
        update: NewUser,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = $1, password_hash = $2, email = $3, birthday = $4 \
             WHERE username = $5 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&update.username)
        .bind(&update.password_hash)
        .bind(&update.email)
        .bind(update.birthday)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| username_conflict(e, &update.username))?;
        Ok(user)
    }

    async fn delete_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE username = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn push_favorite(
        &self,
        username: &str,
        movie_id: Uuid,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET favorites = array_append(favorites, $1) \
             WHERE username = $2 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(movie_id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn pull_favorite(
        &self,
        username: &str,
        movie_id: Uuid,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET favorites = array_remove(favorites, $1) \
             WHERE username = $2 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(movie_id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
