use crate::infrastructure::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Builds the process-wide pool. No connection is opened here; the first
/// query connects, and a request fails if the database is unreachable then.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let options = PgPoolOptions::new().max_connections(config.max_connections);

    let pool = match &config.url {
        Some(url) => options.connect_lazy(url)?,
        None => {
            tracing::warn!("DATABASE_URL is not set, falling back to PG* environment defaults");
            options.connect_lazy_with(PgConnectOptions::new())
        }
    };

    tracing::info!(
        "Database connection pool created (max_connections={})",
        config.max_connections
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
