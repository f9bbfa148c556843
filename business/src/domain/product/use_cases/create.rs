use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::category::model::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::user::model::CurrentUser;

pub struct CreateProductParams {
    pub actor: CurrentUser,
    pub article: String,
    pub name: String,
    pub category: CategoryId,
    pub expiry_date: NaiveDate,
    pub today: NaiveDate,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
