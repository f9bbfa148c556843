use async_trait::async_trait;

use super::errors::UserError;
use super::model::CurrentUser;

/// Service port for one-way password hashing.
///
/// Hashing is slow; implementations keep it off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, UserError>;
    /// Returns `false` for a wrong password and for unreadable hashes alike.
    async fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Service port that turns an authenticated user into a session token and back.
pub trait SessionProvider: Send + Sync {
    fn issue(&self, user: &CurrentUser) -> Result<String, UserError>;
    /// Returns `None` for missing, expired or tampered tokens.
    fn current_user(&self, token: &str) -> Option<CurrentUser>;
}
