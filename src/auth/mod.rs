pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::models::User;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims, TokenSettings};

/// Credentials for `POST /login`, taken from the query string or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: Option<String>,
    #[serde(rename = "Password")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Fills fields missing here from `other`.
    pub fn or(self, other: LoginRequest) -> LoginRequest {
        LoginRequest {
            username: self.username.or(other.username),
            password: self.password.or(other.password),
        }
    }
}

/// Response to a successful login: the user record and a signed bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_merging_prefers_query() {
        let query = LoginRequest {
            username: Some("moviefan".into()),
            password: None,
        };
        let body: LoginRequest =
            serde_json::from_str(r#"{"Username": "someoneelse", "Password": "popcorn"}"#)
                .unwrap();

        let merged = query.or(body);
        assert_eq!(merged.username.as_deref(), Some("moviefan"));
        assert_eq!(merged.password.as_deref(), Some("popcorn"));
    }
}
