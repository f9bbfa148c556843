use poem_openapi::{Enum, Object};

use business::domain::user::model::{CurrentUser, Role};
use business::domain::user::use_cases::login::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum RoleDto {
    #[oai(rename = "admin")]
    Admin,
    #[oai(rename = "user")]
    User,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleDto::Admin,
            Role::User => RoleDto::User,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Login name (unique, cannot be empty)
    pub username: String,
    /// Display name shown next to owned products
    pub name: String,
    /// At least 6 characters
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: RoleDto,
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            name: user.name,
            role: user.role.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: UserResponse,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}
