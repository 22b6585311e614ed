//! PostgreSQL connection pool and schema migrations

use std::time::Duration;

use guestbook_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Schema migrations, embedded in the binary at build time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool tuning that is not part of the deployment configuration
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with(config, &PoolOptions::default()).await
}

/// Create a pool with explicit timeouts
pub async fn create_pool_with(
    config: &DatabaseConfig,
    options: &PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(options.acquire_timeout)
        .idle_timeout(options.idle_timeout)
        .max_lifetime(options.max_lifetime)
        .connect(&config.url)
        .await
}

/// Errors raised while applying migrations
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to apply migrations: {0}")]
    Apply(#[source] MigrateError),
}

/// Apply every pending migration shipped with this crate
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    MIGRATOR.run(pool).await.map_err(MigrationError::Apply)?;
    info!(count = MIGRATOR.iter().count(), "Database migrations applied");

    Ok(())
}
