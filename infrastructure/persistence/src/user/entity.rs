use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{Role, User};

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.id),
            self.username,
            self.name,
            // the column is constrained to known roles; fall back to the least privilege
            self.role.parse::<Role>().unwrap_or(Role::User),
            self.password_hash,
            self.created_at,
        )
    }
}
