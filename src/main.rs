use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use myflix::{
    auth::{AuthMiddleware, TokenSettings},
    config::Config,
    cors::cors,
    routes,
    store::{seed, Catalog, PgCatalog},
    AppError, ACCESS_LOG_FORMAT,
};

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    log::error!("Startup failed: {}", err);
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

async fn open_catalog(config: &Config) -> Result<Arc<dyn Catalog>, AppError> {
    if config.uses_memory_store() {
        log::warn!("Using the in-memory demo catalog; data is lost on exit");
        return Ok(Arc::new(seed::demo_catalog()?));
    }

    let catalog = PgCatalog::connect(&config.connection_uri).await?;
    catalog.migrate().await?;
    log::info!("Connected to the catalog database");
    Ok(Arc::new(catalog))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;
    let catalog = web::Data::from(open_catalog(&config).await.map_err(startup_error)?);
    let tokens = web::Data::new(TokenSettings::new(
        config.jwt_secret.clone(),
        config.jwt_expiry_hours,
    ));
    let allowed_origins = config.allowed_origins.clone();

    log::info!("Listening on {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(tokens.clone())
            .wrap(AuthMiddleware)
            .wrap(cors(&allowed_origins))
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
