use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::CurrentUser;

/// Self-service registration; always creates a regular `user`.
pub struct RegisterUserParams {
    pub username: String,
    pub name: String,
    pub password: String,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<CurrentUser, UserError>;
}
