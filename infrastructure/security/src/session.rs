use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::UserError;
use business::domain::user::model::{CurrentUser, Role};
use business::domain::user::services::SessionProvider;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    username: String,
    name: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256-signed session tokens carrying the caller's identity and role.
pub struct JwtSessionProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessionProvider {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl SessionProvider for JwtSessionProvider {
    fn issue(&self, user: &CurrentUser) -> Result<String, UserError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| UserError::SessionFailed)
    }

    fn current_user(&self, token: &str) -> Option<CurrentUser> {
        let data = decode::<SessionClaims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .ok()?;
        let claims = data.claims;

        Some(CurrentUser {
            id: UserId::from(claims.sub),
            username: claims.username,
            name: claims.name,
            role: claims.role.parse::<Role>().ok()?,
        })
    }
}
