use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductStats;
use crate::domain::user::model::CurrentUser;

pub struct GetProductStatsParams {
    pub viewer: CurrentUser,
    pub today: NaiveDate,
}

#[async_trait]
pub trait GetProductStatsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductStatsParams) -> Result<ProductStats, ProductError>;
}
