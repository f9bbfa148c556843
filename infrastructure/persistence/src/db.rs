use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Database connection failed: {e}");
            DatabaseError::ConnectionError
        })
}

/// Applies the SQL migrations found in `migrations_path`
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        tracing::error!("Migrations directory not found: {migrations_path}");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| {
            tracing::error!("Cannot load migrations: {e}");
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration failed: {e}");
            DatabaseError::MigrationError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_at_least_one_connection_when_configured_with_zero() {
        let config = DatabaseConfig::new("postgres://localhost/warehouse".to_string())
            .with_max_connections(0);

        assert_eq!(config.max_connections, 1);
    }

    #[tokio::test]
    async fn should_fail_when_migrations_directory_is_missing() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/warehouse")
            .unwrap();

        let result = run_migrations(&pool, "/definitely/not/here").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
