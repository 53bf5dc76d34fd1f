use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use helper_match::config::{RepositoryBackend, Settings};
use helper_match::core::Matcher;
use helper_match::error::handle_json_payload_error;
use helper_match::routes::{self, AppState};
use helper_match::services::{
    AppwriteClient, CandidateRepository, InMemoryRepository, PostgresClient,
};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

/// Build the candidate repository selected in configuration
async fn build_repository(settings: &Settings) -> io::Result<Arc<dyn CandidateRepository>> {
    match settings.repository.backend {
        RepositoryBackend::Postgres => {
            let database = settings
                .database
                .as_ref()
                .ok_or_else(|| startup_error("Configuration error", "missing [database] section"))?;

            let client = PostgresClient::from_settings(
                &database.url,
                database.max_connections,
                database.min_connections,
                database.acquire_timeout_secs,
                database.idle_timeout_secs,
            )
            .await
            .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?;

            info!(
                "PostgreSQL repository initialized (max: {} connections)",
                database.max_connections.unwrap_or(10)
            );
            Ok(Arc::new(client))
        }
        RepositoryBackend::Appwrite => {
            let appwrite = settings
                .appwrite
                .as_ref()
                .ok_or_else(|| startup_error("Configuration error", "missing [appwrite] section"))?;

            let client = AppwriteClient::new(
                appwrite.endpoint.clone(),
                appwrite.api_key.clone(),
                appwrite.project_id.clone(),
                appwrite.database_id.clone(),
                appwrite.candidates_collection.clone(),
                appwrite.page_size.unwrap_or(500),
            )
            .map_err(|e| startup_error("Failed to create Appwrite client", e))?;

            info!("Appwrite repository initialized");
            Ok(Arc::new(client))
        }
        RepositoryBackend::Memory => {
            let seed_file = settings.memory.as_ref().and_then(|m| m.seed_file.as_deref());
            let repository = match seed_file {
                Some(path) => InMemoryRepository::from_json_file(path)
                    .map_err(|e| startup_error("Failed to load helper seed file", e))?,
                None => {
                    warn!("In-memory repository has no seed file; the helper pool is empty");
                    InMemoryRepository::default()
                }
            };

            info!("In-memory repository initialized with {} helpers", repository.len());
            Ok(Arc::new(repository))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    helper_match::telemetry::init();

    info!("Starting Helper Match service...");

    let settings = Settings::load().map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let repository = build_repository(&settings).await?;

    let gazetteer = settings.matching.build_gazetteer();
    info!("Gazetteer loaded with {} localities", gazetteer.len());

    let app_state = AppState {
        repository,
        matcher: Matcher::new(gazetteer),
        fetch_timeout: settings.matching.fetch_timeout(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
