use dotenvy::dotenv;
use std::sync::Arc;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use application::BoardService;
use data::post_repository::PostgresPostRepository;
use infrastructure::{
    config::AppConfig,
    database::{create_pool, run_migrations},
    logging::init_logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logging
    init_logging(&config);

    let http_addr = config.http_addr();

    tracing::info!("Starting board server...");
    tracing::info!("Environment: {}", config.app_env);
    tracing::info!("HTTP server will listen on {}", http_addr);
    tracing::info!("CORS allowed origins: {}", config.cors_allowed_origins);

    // Pool connects on first use
    let pool = create_pool(&config.database)?;

    if config.database.url.is_some() {
        tracing::info!("Running database migrations...");
        run_migrations(&pool).await?;
    } else {
        tracing::warn!("DATABASE_URL is not set, skipping migrations");
    }

    let post_repo = Arc::new(PostgresPostRepository::new(pool));
    let board_service = Arc::new(BoardService::new(post_repo));

    tracing::info!("Services initialized successfully");

    if let Err(e) = run_http_server(http_addr, board_service, config.cors_allowed_origins).await {
        tracing::error!("HTTP server error: {}", e);
        return Err(e);
    }

    tracing::info!("Shutting down...");
    Ok(())
}

/// Configure CORS for the HTTP server with allowed origins from .env
fn configure_cors(allowed_origins: &str) -> actix_cors::Cors {
    use actix_cors::Cors;
    use actix_web::http::header;

    let origins: Vec<&str> = allowed_origins.split(',').map(|s| s.trim()).collect();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in origins {
        if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
            tracing::debug!("Added allowed CORS origin: {}", origin);
        }
    }

    cors
}

async fn run_http_server(
    addr: String,
    board_service: Arc<BoardService>,
    cors_allowed_origins: String,
) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&cors_allowed_origins))
            .app_data(web::Data::new(board_service.clone()))
            .configure(presentation::configure_routes)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
