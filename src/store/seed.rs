//! Sample catalog loaded when the service runs with `CONNECTION_URI=memory`.

use super::MemoryCatalog;
use crate::error::AppError;
use crate::models::{Director, DirectorSummary, Genre, GenreSummary, Movie};

const GENRES: &[(&str, &str)] = &[
    ("Action", "Fights, chases and explosions."),
    ("Mystery", "A puzzle to be solved before the credits."),
    ("Thriller", "Sustained tension and suspense."),
    ("Comedy", "Made to make you laugh."),
    ("Family", "Suitable for all ages."),
    ("Horror", "Made to frighten."),
    ("Animation", "Drawn, modelled or rendered frame by frame."),
    ("Crime", "Criminals, detectives and the space between."),
    ("Drama", "Character-driven, emotionally serious stories."),
    ("Fantasy", "Magic, myth and invented worlds."),
    ("Historical", "Set in and about the past."),
    ("Romance", "Love stories."),
    ("Sci-Fi", "Speculative science and technology."),
];

const DIRECTORS: &[(&str, &str, &str)] = &[
    ("David Leitch", "Stunt performer turned action director.", "1975"),
    ("Peter Jackson", "New Zealand director of the Middle-earth films.", "1961"),
    ("Adam Wingard", "American director of horror and monster films.", "1982"),
    ("Michael Dougherty", "American director and screenwriter.", "1974"),
    ("Sam Raimi", "American director known for the Evil Dead series.", "1959"),
    ("John Carpenter", "American director, writer and composer.", "1948"),
    ("Joss Whedon", "American director and screenwriter.", "1964"),
];

// (title, director, genre, description)
const MOVIES: &[(&str, &str, &str, &str)] = &[
    ("Bullet Train", "David Leitch", "Action", "Five assassins share a bullet train."),
    (
        "Lord of the Rings: The Fellowship of the Ring",
        "Peter Jackson",
        "Fantasy",
        "A hobbit sets out to destroy a ring of power.",
    ),
    ("Godzilla VS Kong", "Adam Wingard", "Sci-Fi", "Two titans collide."),
    (
        "Godzilla: King of the Monsters",
        "Michael Dougherty",
        "Sci-Fi",
        "Godzilla faces King Ghidorah.",
    ),
    ("John Wick", "David Leitch", "Action", "A retired hitman seeks vengeance."),
    ("Evil Dead II", "Sam Raimi", "Horror", "Ash returns to the cabin in the woods."),
    ("Army of Darkness", "Sam Raimi", "Horror", "Ash is stranded in the Middle Ages."),
    ("The Thing", "John Carpenter", "Horror", "A shape-shifter stalks an Antarctic base."),
    ("The Avengers", "Joss Whedon", "Action", "Earth's mightiest heroes assemble."),
    (
        "The Lord of the Rings: Return of the King",
        "Peter Jackson",
        "Fantasy",
        "The final battle for Middle-earth.",
    ),
];

fn lookup<'a, T>(table: &'a [T], name: &str, key: impl Fn(&T) -> &str) -> Result<&'a T, AppError> {
    table.iter().find(|row| key(row) == name).ok_or_else(|| {
        AppError::InternalServerError(format!("seed data references unknown entry {:?}", name))
    })
}

/// Builds a catalog holding the sample genres, directors and movies.
pub fn demo_catalog() -> Result<MemoryCatalog, AppError> {
    let catalog = MemoryCatalog::new();

    for (name, description) in GENRES {
        catalog.insert_genre(Genre::new(*name, *description))?;
    }
    for (name, bio, birth) in DIRECTORS {
        catalog.insert_director(Director::new(*name, *bio, *birth, ""))?;
    }
    for (title, director, genre, description) in MOVIES {
        let (_, genre_description) = lookup(GENRES, genre, |g| g.0)?;
        let (_, bio, _) = lookup(DIRECTORS, director, |d| d.0)?;
        catalog.insert_movie(Movie::new(
            *title,
            *description,
            GenreSummary {
                name: genre.to_string(),
                description: genre_description.to_string(),
            },
            DirectorSummary {
                name: director.to_string(),
                bio: bio.to_string(),
            },
        ))?;
    }

    log::info!(
        "Seeded demo catalog with {} movies, {} genres and {} directors",
        MOVIES.len(),
        GENRES.len(),
        DIRECTORS.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Catalog;

    #[actix_rt::test]
    async fn test_demo_catalog_contents() {
        let catalog = demo_catalog().unwrap();

        assert_eq!(catalog.movies().await.unwrap().len(), MOVIES.len());
        assert_eq!(catalog.genres().await.unwrap().len(), GENRES.len());
        assert_eq!(catalog.directors().await.unwrap().len(), DIRECTORS.len());

        let thing = catalog.movie_by_title("The Thing").await.unwrap().unwrap();
        assert_eq!(thing.director.name, "John Carpenter");
        assert_eq!(thing.genre.name, "Horror");
        assert!(catalog.users().await.unwrap().is_empty());
    }
}
