use anyhow::{Context, bail};
use chrono::Duration;
use std::env;

const DEFAULT_TTL_HOURS: i64 = 12;

/// Session token settings
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret used to sign session tokens (required)
    /// - JWT_TTL_HOURS: Token lifetime in hours (default: 12)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let ttl_hours = env::var("JWT_TTL_HOURS").ok();

        Self::build(jwt_secret, ttl_hours.as_deref())
    }

    fn build(jwt_secret: String, ttl_hours: Option<&str>) -> anyhow::Result<Self> {
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        let hours = match ttl_hours {
            Some(raw) => raw
                .parse::<i64>()
                .context("JWT_TTL_HOURS must be an integer")?,
            None => DEFAULT_TTL_HOURS,
        };
        if hours <= 0 {
            bail!("JWT_TTL_HOURS must be positive");
        }

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::hours(hours),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_ttl_when_not_configured() {
        let config = AuthConfig::build("secret".to_string(), None).unwrap();

        assert_eq!(config.token_ttl, Duration::hours(12));
    }

    #[test]
    fn should_reject_empty_secret() {
        assert!(AuthConfig::build("  ".to_string(), None).is_err());
    }

    #[test]
    fn should_reject_non_positive_ttl() {
        assert!(AuthConfig::build("secret".to_string(), Some("0")).is_err());
        assert!(AuthConfig::build("secret".to_string(), Some("abc")).is_err());
    }
}
