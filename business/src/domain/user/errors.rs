#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.username_empty")]
    UsernameEmpty,
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.already_exists")]
    AlreadyExists,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.hashing_failed")]
    HashingFailed,
    #[error("user.session_failed")]
    SessionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
