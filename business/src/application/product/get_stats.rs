use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::{ProductStats, product_stats};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_stats::{GetProductStatsParams, GetProductStatsUseCase};
use crate::domain::product::value_objects::ProductScope;

pub struct GetProductStatsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductStatsUseCase for GetProductStatsUseCaseImpl {
    async fn execute(&self, params: GetProductStatsParams) -> Result<ProductStats, ProductError> {
        self.logger.debug(&format!(
            "Computing product stats for {}",
            params.viewer.username
        ));

        let scope = ProductScope::for_viewer(&params.viewer);
        let snapshot = self.repository.list(&scope).await?;

        Ok(product_stats(&snapshot, params.today, &params.viewer))
    }
}
