pub mod director;
pub mod genre;
pub mod movie;
pub mod user;

pub use director::Director;
pub use genre::Genre;
pub use movie::{DirectorSummary, GenreSummary, Movie};
pub use user::{NewUser, User, UserInput};
