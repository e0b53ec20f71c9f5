mod postgres_repository;


use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

pub use postgres_repository::create_postgres_repository;

/// Opens a connection pool, retrying while the database comes up.
///
/// Serverless Postgres instances may be suspended and take a moment to
/// accept connections, so the first attempts are allowed to fail.
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<PgPool> {
    // ---
    let options = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout);

    let max_attempts = config.retry_count.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match options.clone().connect(&config.database_url).await {
            Ok(pool) => {
                tracing::info!("Connected to database after {attempt} attempt(s)");
                return Ok(pool);
            }
            Err(err) if attempt < max_attempts => {
                tracing::warn!(
                    "Database connection attempt {attempt}/{max_attempts} failed: {err}; retrying in {:?}",
                    config.retry_delay
                );
                tokio::time::sleep(config.retry_delay).await;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to connect to database after {attempt} attempt(s)")
                });
            }
        }
    }
}

/// Applies the migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    // ---
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
