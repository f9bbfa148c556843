use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::CurrentUser;

pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<Session, UserError>;
}
