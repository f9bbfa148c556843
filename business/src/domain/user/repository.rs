use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
    /// Inserts a new user; fails with `Duplicated` when the username is taken.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
