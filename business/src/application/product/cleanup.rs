use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::cleanup::{
    CleanupProductsParams, CleanupProductsUseCase, RETENTION_MONTHS,
};
use crate::domain::shared::dates::add_months;

pub struct CleanupProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CleanupProductsUseCase for CleanupProductsUseCaseImpl {
    async fn execute(&self, params: CleanupProductsParams) -> Result<u64, ProductError> {
        if !params.actor.is_admin() {
            self.logger.warn(&format!(
                "{} may not purge expired products",
                params.actor.username
            ));
            return Err(ProductError::Forbidden);
        }

        let Some(cutoff) = add_months(params.today, -RETENTION_MONTHS) else {
            return Ok(0);
        };

        self.logger
            .info(&format!("Purging products expired before {}", cutoff));
        let purged = self.repository.delete_expired_before(cutoff).await?;

        self.logger.info(&format!("Purged {} products", purged));
        Ok(purged)
    }
}
