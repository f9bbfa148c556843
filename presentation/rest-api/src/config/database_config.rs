use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: When set, migrations in this directory are applied at start-up
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max = max
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;

    if let Ok(path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &path).await?;
        tracing::info!("Migrations applied from {path}");
    }

    Ok(pool)
}
