use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher as PhcHasher, PasswordVerifier, SaltString};

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id password hashing.
///
/// Hashes are stored as PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`),
/// so cost parameters can be raised without invalidating existing hashes:
/// verification always reads them back from the stored string.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

fn verify_phc(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, UserError> {
        let argon2 = self.argon2();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|_| UserError::HashingFailed)?
        .map_err(|_| UserError::HashingFailed)
    }

    async fn verify(&self, password: &str, password_hash: &str) -> bool {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();

        tokio::task::spawn_blocking(move || verify_phc(&password, &password_hash))
            .await
            .unwrap_or(false)
    }
}
