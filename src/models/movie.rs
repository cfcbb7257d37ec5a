use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Genre data embedded in a movie record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GenreSummary {
    pub name: String,
    pub description: String,
}

/// Director data embedded in a movie record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DirectorSummary {
    pub name: String,
    pub bio: String,
}

/// A movie as returned by the API.
///
/// `Title` is the natural key used by every lookup route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre: GenreSummary,
    pub director: DirectorSummary,
    #[serde(default)]
    pub actors: Vec<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Flat `movies` row; the embedded genre and director are stored as prefixed columns.
#[derive(Debug, FromRow)]
pub struct MovieRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre_name: String,
    pub genre_description: String,
    pub director_name: String,
    pub director_bio: String,
    pub actors: Vec<String>,
    pub image_path: Option<String>,
    pub featured: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            genre: GenreSummary {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: DirectorSummary {
                name: row.director_name,
                bio: row.director_bio,
            },
            actors: row.actors,
            image_path: row.image_path,
            featured: row.featured,
        }
    }
}

impl Movie {
    /// Creates a movie with a fresh id and no actors, image or featured flag.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        genre: GenreSummary,
        director: DirectorSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            genre,
            director,
            actors: Vec::new(),
            image_path: None,
            featured: false,
        }
    }
}
