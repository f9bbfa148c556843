use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, Role, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::ensure_admin::{EnsureAdminParams, EnsureAdminUseCase};

pub struct EnsureAdminUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EnsureAdminUseCase for EnsureAdminUseCaseImpl {
    async fn execute(&self, params: EnsureAdminParams) -> Result<bool, UserError> {
        let props = NewUserProps {
            username: params.username,
            name: params.name,
            role: Role::Admin,
            password: params.password,
        };
        User::validate(&props)?;

        if self
            .repository
            .find_by_username(props.username.trim())
            .await?
            .is_some()
        {
            self.logger.debug("Administrator account already present");
            return Ok(false);
        }

        let password_hash = self.hasher.hash(&props.password).await?;
        let admin = User::new(props, password_hash)?;

        match self.repository.save(&admin).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Administrator account created: {}", admin.username));
                Ok(true)
            }
            // another instance created it first
            Err(RepositoryError::Duplicated) => Ok(false),
            Err(e) => Err(UserError::Repository(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockHasher, MockUserRepo, mock_logger};
    use chrono::Utc;

    fn use_case(repo: MockUserRepo) -> EnsureAdminUseCaseImpl {
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|p| Ok(format!("hashed:{p}")));
        EnsureAdminUseCaseImpl {
            repository: Arc::new(repo),
            hasher: Arc::new(hasher),
            logger: mock_logger(),
        }
    }

    fn params() -> EnsureAdminParams {
        EnsureAdminParams {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            password: "admin123".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_admin_when_missing() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_save()
            .withf(|user| user.role == Role::Admin && user.username == "admin")
            .times(1)
            .returning(|_| Ok(()));

        assert!(use_case(repo).execute(params()).await.unwrap());
    }

    #[tokio::test]
    async fn should_leave_existing_admin_untouched() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| {
            Ok(Some(User::from_repository(
                UserId::new("a-1"),
                "admin".to_string(),
                "Administrator".to_string(),
                Role::Admin,
                "old".to_string(),
                Utc::now(),
            )))
        });
        repo.expect_save().never();

        assert!(!use_case(repo).execute(params()).await.unwrap());
    }

    #[tokio::test]
    async fn should_treat_concurrent_creation_as_present() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        assert!(!use_case(repo).execute(params()).await.unwrap());
    }
}
