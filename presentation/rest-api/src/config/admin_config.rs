use std::env;

/// Administrator account ensured at start-up
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl AdminConfig {
    /// Environment variables:
    /// - ADMIN_USERNAME / ADMIN_PASSWORD: Both required to bootstrap an administrator
    /// - ADMIN_NAME: Display name (default: "Administrator")
    ///
    /// Returns `None` when no administrator is configured.
    pub fn from_env() -> Option<Self> {
        let username = env::var("ADMIN_USERNAME").ok()?;
        let password = env::var("ADMIN_PASSWORD").ok()?;
        let name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".to_string());

        Some(Self {
            username,
            password,
            name,
        })
    }
}
