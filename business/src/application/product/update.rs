use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::registry::CategoryRegistry;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductScope;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub registry: Arc<CategoryRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_repository)?;

        if !params.actor.can_manage(&existing.user_id) {
            self.logger.warn(&format!(
                "{} may not edit product {}",
                params.actor.username, existing.id
            ));
            return Err(ProductError::Forbidden);
        }

        let revised = existing.revise(
            ProductFields {
                article: params.article,
                name: params.name,
                category: params.category,
                expiry_date: params.expiry_date,
            },
            &self.registry,
            params.today,
        )?;

        let owned = self
            .repository
            .list(&ProductScope::Owner(existing.user_id.clone()))
            .await?;
        if owned
            .iter()
            .any(|p| p.id != revised.id && p.same_batch_as(&revised.article, revised.expiry_date))
        {
            return Err(ProductError::Duplicated);
        }

        let updated = self
            .repository
            .update(&revised, existing.updated_at)
            .await
            .map_err(ProductError::from_repository)?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
