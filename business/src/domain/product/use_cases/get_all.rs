use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::user::model::CurrentUser;

pub struct GetProductsParams {
    pub viewer: CurrentUser,
    pub filter: ProductFilter,
    pub today: NaiveDate,
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, ProductError>;
}
