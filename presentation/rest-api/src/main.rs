use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use business::domain::user::use_cases::ensure_admin::EnsureAdminParams;
use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// - config/: environment configuration (server, CORS, database, sessions, schedule)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mappers per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env()?;
    let pool = database_config::init_database().await?;
    let container = DependencyContainer::new(pool, &config).await?;

    if let Some(admin) = &config.admin {
        let created = container
            .ensure_admin_use_case
            .execute(EnsureAdminParams {
                username: admin.username.clone(),
                name: admin.name.clone(),
                password: admin.password.clone(),
            })
            .await?;
        if created {
            tracing::info!("Bootstrap administrator '{}' created", admin.username);
        }
    }

    Server::run(config, container).await?;

    Ok(())
}
