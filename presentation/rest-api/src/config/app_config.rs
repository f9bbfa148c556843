use super::{
    admin_config::AdminConfig, auth_config::AuthConfig, cors_config,
    schedule_config::ScheduleConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub schedule: ScheduleConfig,
    pub admin: Option<AdminConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            schedule: ScheduleConfig::from_env()?,
            admin: AdminConfig::from_env(),
        })
    }
}
