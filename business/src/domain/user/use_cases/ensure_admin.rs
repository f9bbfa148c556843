use async_trait::async_trait;

use crate::domain::user::errors::UserError;

/// Bootstrap administrator account created at start-up.
pub struct EnsureAdminParams {
    pub username: String,
    pub name: String,
    pub password: String,
}

#[async_trait]
pub trait EnsureAdminUseCase: Send + Sync {
    /// Returns `true` when the account had to be created.
    async fn execute(&self, params: EnsureAdminParams) -> Result<bool, UserError>;
}
