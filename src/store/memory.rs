use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::Catalog;
use crate::error::AppError;
use crate::models::{Director, Genre, Movie, NewUser, User};

#[derive(Debug, Default)]
struct Collections {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    directors: Vec<Director>,
    users: Vec<User>,
}

/// Process-local catalog used by the demo mode and the integration tests.
///
/// Records keep insertion order. Lookups by natural key return the first match.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<Collections>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_movie(&self, movie: Movie) -> Result<(), AppError> {
        self.write()?.movies.push(movie);
        Ok(())
    }

    pub fn insert_genre(&self, genre: Genre) -> Result<(), AppError> {
        self.write()?.genres.push(genre);
        Ok(())
    }

    pub fn insert_director(&self, director: Director) -> Result<(), AppError> {
        self.write()?.directors.push(director);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::InternalServerError("catalog lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::InternalServerError("catalog lock poisoned".into()))
    }

    fn modify_user<F>(&self, username: &str, change: F) -> Result<Option<User>, AppError>
    where
        F: FnOnce(&mut User),
    {
        let mut collections = self.write()?;
        Ok(collections
            .users
            .iter_mut()
            .find(|u| u.username == username)
            .map(|user| {
                change(user);
                user.clone()
            }))
    }
}

/// Fails with `BadRequest` when `username` is held by a user other than `current`.
fn ensure_username_free(
    users: &[User],
    username: &str,
    current: Option<&str>,
) -> Result<(), AppError> {
    let taken = users
        .iter()
        .any(|u| u.username == username && Some(u.username.as_str()) != current);
    if taken {
        return Err(AppError::BadRequest(format!("{} already exists", username)));
    }
    Ok(())
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.read()?.movies.clone())
    }

    async fn movie_by_title(&self, title: &str) -> Result<Option<Movie>, AppError> {
        Ok(self.read()?.movies.iter().find(|m| m.title == title).cloned())
    }

    async fn genres(&self) -> Result<Vec<Genre>, AppError> {
        Ok(self.read()?.genres.clone())
    }

    async fn genre_by_name(&self, name: &str) -> Result<Option<Genre>, AppError> {
        Ok(self.read()?.genres.iter().find(|g| g.name == name).cloned())
    }

    async fn directors(&self) -> Result<Vec<Director>, AppError> {
        Ok(self.read()?.directors.clone())
    }

    async fn director_by_name(&self, name: &str) -> Result<Option<Director>, AppError> {
        Ok(self.read()?.directors.iter().find(|d| d.name == name).cloned())
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.users.clone())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut collections = self.write()?;
        ensure_username_free(&collections.users, &user.username, None)?;

        let user = User::create(user);
        collections.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        username: &str,
        update: NewUser,
    ) -> Result<Option<User>, AppError> {
        let mut collections = self.write()?;
        ensure_username_free(&collections.users, &update.username, Some(username))?;

        Ok(collections
            .users
            .iter_mut()
            .find(|u| u.username == username)
            .map(|user| {
                user.username = update.username;
                user.password = update.password_hash;
                user.email = update.email;
                user.birthday = update.birthday;
                user.clone()
            }))
    }

    async fn delete_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let mut collections = self.write()?;
        Ok(collections
            .users
            .iter()
            .position(|u| u.username == username)
            .map(|index| collections.users.remove(index)))
    }

    async fn push_favorite(
        &self,
        username: &str,
        movie_id: Uuid,
    ) -> Result<Option<User>, AppError> {
        self.modify_user(username, |user| user.favorites.push(movie_id))
    }

    async fn pull_favorite(
        &self,
        username: &str,
        movie_id: Uuid,
    ) -> Result<Option<User>, AppError> {
        self.modify_user(username, |user| user.favorites.retain(|id| *id != movie_id))
    }
}
