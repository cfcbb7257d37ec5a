use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
}

/// A registered user.
///
/// `password` holds the bcrypt hash and is never written to a response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(default, skip_serializing)]
    #[sqlx(rename = "password_hash")]
    pub password: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub favorites: Vec<Uuid>,
}

/// Body of `POST /user` and `PUT /user`.
///
/// Absent fields deserialize as empty so that they are reported by validation (422)
/// rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UserInput {
    #[serde(rename = "Username")]
    #[validate(
        length(min = 5, message = "Username must be at least five characters."),
        regex(
            path = "USERNAME_REGEX",
            message = "Username contains non alphanumeric characters - not allowed."
        )
    )]
    pub username: String,

    #[serde(rename = "Password")]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(rename = "Email")]
    #[validate(email(message = "Email does not appear to be valid"))]
    pub email: String,

    #[serde(rename = "Birthday")]
    pub birthday: Option<NaiveDate>,
}

/// A user ready to be written to the store: the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

impl UserInput {
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username,
            password_hash,
            email: self.email,
            birthday: self.birthday,
        }
    }
}

impl User {
    /// Creates a stored user with a fresh id and no favorites.
    pub fn create(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: new_user.username,
            password: new_user.password_hash,
            email: new_user.email,
            birthday: new_user.birthday,
            favorites: Vec::new(),
        }
    }
}
