use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{CurrentUser, NewUserProps, Role, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<CurrentUser, UserError> {
        let props = NewUserProps {
            username: params.username,
            name: params.name,
            role: Role::User,
            password: params.password,
        };
        User::validate(&props)?;

        let username = props.username.trim();
        self.logger.info(&format!("Registering user: {}", username));

        if self.repository.find_by_username(username).await?.is_some() {
            return Err(UserError::AlreadyExists);
        }

        let password_hash = self.hasher.hash(&props.password).await?;
        let user = User::new(props, password_hash)?;

        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::AlreadyExists,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(user.to_current_user())
    }
}
