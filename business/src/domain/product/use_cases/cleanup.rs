use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::user::model::CurrentUser;

/// Products that expired more than this many months ago are purged.
pub const RETENTION_MONTHS: i32 = 6;

pub struct CleanupProductsParams {
    pub actor: CurrentUser,
    pub today: NaiveDate,
}

#[async_trait]
pub trait CleanupProductsUseCase: Send + Sync {
    /// Returns the number of purged products.
    async fn execute(&self, params: CleanupProductsParams) -> Result<u64, ProductError>;
}
