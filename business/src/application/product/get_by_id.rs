use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_repository)?;

        if !params.viewer.can_manage(&product.user_id) {
            return Err(ProductError::Forbidden);
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockProductRepo, admin, mock_logger, stored_product, today, user};
    use uuid::Uuid;

    fn use_case(repo: MockProductRepo) -> GetProductByIdUseCaseImpl {
        GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_own_product() {
        let existing = stored_product("ann", "A-1", today());
        let id = existing.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(move |_| Ok(existing.clone()));

        let product = use_case(repo)
            .execute(GetProductByIdParams {
                id,
                viewer: user("ann"),
            })
            .await
            .unwrap();

        assert_eq!(product.id, id);
    }

    #[tokio::test]
    async fn should_forbid_reading_foreign_product() {
        let existing = stored_product("bob", "A-1", today());
        let id = existing.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(move |_| Ok(existing.clone()));

        let result = use_case(repo)
            .execute(GetProductByIdParams {
                id,
                viewer: user("ann"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Forbidden)));
    }

    #[tokio::test]
    async fn should_let_admin_read_foreign_product() {
        let existing = stored_product("bob", "A-1", today());
        let id = existing.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(move |_| Ok(existing.clone()));

        let result = use_case(repo)
            .execute(GetProductByIdParams {
                id,
                viewer: admin("boss"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo)
            .execute(GetProductByIdParams {
                id: Uuid::new_v4(),
                viewer: user("ann"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
