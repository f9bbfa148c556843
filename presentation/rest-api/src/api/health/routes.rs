use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy", or "degraded" when the database does not answer
    pub status: String,
    pub database: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness and database reachability for probes and load balancers.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public; does not require a session.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();
        if !database {
            tracing::warn!("Health check: database unreachable");
        }

        Json(HealthCheckResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
