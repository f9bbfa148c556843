use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Identity of the caller, as resolved by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Administrators act on every product, others only on their own.
    pub fn can_manage(&self, owner: &UserId) -> bool {
        self.is_admin() || &self.id == owner
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub username: String,
    pub name: String,
    pub role: Role,
    pub password: String,
}

impl User {
    /// Validates the registration input. The hash is computed by the caller
    /// once validation passed, so weak passwords never reach the hasher.
    pub fn validate(props: &NewUserProps) -> Result<(), UserError> {
        if props.username.trim().is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        if props.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }
        if props.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }
        Ok(())
    }

    pub fn new(props: NewUserProps, password_hash: String) -> Result<Self, UserError> {
        Self::validate(&props)?;

        Ok(Self {
            id: UserId::generate(),
            username: props.username.trim().to_string(),
            name: props.name.trim().to_string(),
            role: props.role,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        username: String,
        name: String,
        role: Role,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            name,
            role,
            password_hash,
            created_at,
        }
    }

    pub fn to_current_user(&self) -> CurrentUser {
        CurrentUser {
            id: self.id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}
