use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductScope;

/// Storage port for products.
///
/// Writers serialise through optimistic concurrency: `update` only applies when
/// the stored row still carries `expected_updated_at`, otherwise it fails with
/// `Conflict` and the caller re-reads before trying again.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products in scope, ordered by expiry date ascending.
    async fn list(&self, scope: &ProductScope) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        product: &Product,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every product that expired before `cutoff`; returns how many.
    async fn delete_expired_before(&self, cutoff: NaiveDate) -> Result<u64, RepositoryError>;
}
