use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::filter_products;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use crate::domain::product::value_objects::ProductScope;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products for {} (filter: {})",
            params.viewer.username, params.filter
        ));

        let scope = ProductScope::for_viewer(&params.viewer);
        let snapshot = self.repository.list(&scope).await?;
        let products = filter_products(&snapshot, &params.filter, params.today, &params.viewer);

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::filter::ProductFilter;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockProductRepo, admin, mock_logger, stored_product, today, user};
    use chrono::Days;

    fn use_case(repo: MockProductRepo) -> GetProductsUseCaseImpl {
        GetProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_request_own_scope_for_regular_user() {
        let mut repo = MockProductRepo::new();
        repo.expect_list()
            .withf(|scope| *scope == ProductScope::Owner(UserId::new("ann")))
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = use_case(repo)
            .execute(GetProductsParams {
                viewer: user("ann"),
                filter: ProductFilter::All,
                today: today(),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_drop_foreign_products_even_if_repository_leaks_them() {
        let mut repo = MockProductRepo::new();
        repo.expect_list().returning(|_| {
            Ok(vec![
                stored_product("ann", "mine", today()),
                stored_product("bob", "leaked", today()),
            ])
        });

        let products = use_case(repo)
            .execute(GetProductsParams {
                viewer: user("ann"),
                filter: ProductFilter::All,
                today: today(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].article, "mine");
    }

    #[tokio::test]
    async fn should_request_all_scope_for_admin_and_apply_filter() {
        let mut repo = MockProductRepo::new();
        repo.expect_list()
            .withf(|scope| *scope == ProductScope::All)
            .returning(|_| {
                Ok(vec![
                    stored_product("ann", "soon", today() + Days::new(3)),
                    stored_product("bob", "later", today() + Days::new(40)),
                    stored_product("bob", "gone", today() - Days::new(1)),
                ])
            });

        let products = use_case(repo)
            .execute(GetProductsParams {
                viewer: admin("boss"),
                filter: ProductFilter::Week,
                today: today(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].article, "soon");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut repo = MockProductRepo::new();
        repo.expect_list()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(repo)
            .execute(GetProductsParams {
                viewer: user("ann"),
                filter: ProductFilter::All,
                today: today(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Repository(_))));
    }
}
