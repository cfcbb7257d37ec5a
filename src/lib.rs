#![doc = "The `myflix` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, the catalog data-access layer, authentication,"]
#![doc = "routing configuration and error handling for the myflix movie API."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod cors;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::error::AppError;
pub use crate::store::Catalog;

/// Access-log format, modelled on the Apache common log format.
pub const ACCESS_LOG_FORMAT: &str = r#"%a - - [%t] "%r" %s %b %Dms"#;
