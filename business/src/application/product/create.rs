use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::registry::CategoryRegistry;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::ProductScope;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub registry: Arc<CategoryRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product {} for {}",
            params.article, params.actor.username
        ));

        let product = Product::new(
            params.actor.id.clone(),
            ProductFields {
                article: params.article,
                name: params.name,
                category: params.category,
                expiry_date: params.expiry_date,
            },
            &self.registry,
            params.today,
        )?;

        // (article, expiry date) is unique per owner
        let owned = self
            .repository
            .list(&ProductScope::Owner(product.user_id.clone()))
            .await?;
        if owned
            .iter()
            .any(|p| p.same_batch_as(&product.article, product.expiry_date))
        {
            self.logger.warn(&format!(
                "Rejected duplicate batch {} / {}",
                product.article, product.expiry_date
            ));
            return Err(ProductError::Duplicated);
        }

        // a concurrent insert of the same batch is still rejected by the store
        let created = self
            .repository
            .create(&product)
            .await
            .map_err(ProductError::from_repository)?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
