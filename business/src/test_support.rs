//! Test doubles and fixtures shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::category::model::CategoryId;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductScope;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{CurrentUser, Role, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, SessionProvider};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn list(&self, scope: &ProductScope) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product, expected_updated_at: DateTime<Utc>) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_expired_before(&self, cutoff: NaiveDate) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    #[async_trait]
    impl PasswordHasher for Hasher {
        async fn hash(&self, password: &str) -> Result<String, UserError>;
        async fn verify(&self, password: &str, password_hash: &str) -> bool;
    }
}

mock! {
    pub Sessions {}

    impl SessionProvider for Sessions {
        fn issue(&self, user: &CurrentUser) -> Result<String, UserError>;
        fn current_user(&self, token: &str) -> Option<CurrentUser>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn user(id: &str) -> CurrentUser {
    CurrentUser {
        id: UserId::new(id),
        username: id.to_string(),
        name: format!("Staff {id}"),
        role: Role::User,
    }
}

pub fn admin(id: &str) -> CurrentUser {
    CurrentUser {
        role: Role::Admin,
        ..user(id)
    }
}

pub fn stored_product(owner: &str, article: &str, expiry_date: NaiveDate) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        UserId::new(owner),
        article.to_string(),
        format!("Batch {article}"),
        CategoryId::new("regular"),
        expiry_date,
        None,
        Utc::now(),
        Utc::now(),
    )
}

/// A repository `list` that honours the requested scope over a fixed set.
pub fn scoped_listing(
    products: Vec<Product>,
) -> impl Fn(&ProductScope) -> Result<Vec<Product>, RepositoryError> + Send + 'static {
    move |scope| {
        Ok(products
            .iter()
            .filter(|p| scope.includes(&p.user_id))
            .cloned()
            .collect())
    }
}
