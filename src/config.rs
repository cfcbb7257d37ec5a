use std::env;
use std::fmt;

/// Origins allowed to make cross-origin requests when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://testsite.com",
    "http://localhost:1234",
    "https://egglol1-myflix-85b3e5.netlify.app",
    "http://localhost:4200",
];

/// Upper bound for `JWT_EXPIRY_HOURS` (ten years).
pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 366 * 10;

/// `CONNECTION_URI` value that selects the seeded in-memory catalog instead of PostgreSQL.
pub const MEMORY_STORE: &str = "memory";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub connection_uri: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_uri = lookup("CONNECTION_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .ok_or(ConfigError::Missing("CONNECTION_URI"))?;

        let server_port = parse_or(&lookup, "PORT", 8080)?;
        let jwt_expiry_hours = parse_or(&lookup, "JWT_EXPIRY_HOURS", 24 * 7)?;
        if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&jwt_expiry_hours) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_HOURS",
                value: jwt_expiry_hours.to_string(),
            });
        }

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Ok(Self {
            connection_uri,
            server_port,
            server_host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            jwt_secret,
            jwt_expiry_hours,
            allowed_origins,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.connection_uri == MEMORY_STORE
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
