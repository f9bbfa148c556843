use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, SessionProvider};
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase, Session};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub sessions: Arc<dyn SessionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, UserError> {
        let username = params.username.trim();

        // unknown user and wrong password look the same to the caller
        let Some(user) = self.repository.find_by_username(username).await? else {
            self.logger
                .warn(&format!("Login attempt for unknown user: {}", username));
            return Err(UserError::InvalidCredentials);
        };
        if !self
            .hasher
            .verify(&params.password, &user.password_hash)
            .await
        {
            self.logger
                .warn(&format!("Wrong password for user: {}", username));
            return Err(UserError::InvalidCredentials);
        }

        let current = user.to_current_user();
        let token = self.sessions.issue(&current)?;

        self.logger.info(&format!("User logged in: {}", current.id));
        Ok(Session {
            token,
            user: current,
        })
    }
}
