use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_repository)?;

        if !params.actor.can_manage(&existing.user_id) {
            self.logger.warn(&format!(
                "{} may not delete product {}",
                params.actor.username, params.id
            ));
            return Err(ProductError::Forbidden);
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(ProductError::from_repository)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
