//! Server configuration read from the environment (and `.env` via dotenvy).

use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `None` when `DATABASE_URL` is unset; the pool then falls back to libpq defaults.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: String,
    pub app_env: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        };

        Self {
            host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            app_env: app_env(),
            database,
        }
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Default tracing directives when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.is_production() {
            "info"
        } else {
            "info,board_server=debug"
        }
    }
}

pub fn app_env() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Whether a connection string is configured. Presence only, not validity.
pub fn has_database_url() -> bool {
    env::var_os("DATABASE_URL").is_some_and(|url| !url.is_empty())
}
