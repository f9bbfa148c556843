use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::category::model::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::user::model::CurrentUser;

/// Full replacement of a product's editable fields. The owner never changes.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub actor: CurrentUser,
    pub article: String,
    pub name: String,
    pub category: CategoryId,
    pub expiry_date: NaiveDate,
    pub today: NaiveDate,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
