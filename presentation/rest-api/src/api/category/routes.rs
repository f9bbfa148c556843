use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::category::use_cases::get_all::GetCategoriesUseCase;

use crate::api::category::dto::CategoryResponse;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetCategoriesUseCase>,
}

impl CategoryApi {
    pub fn new(get_all_use_case: Arc<dyn GetCategoriesUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl CategoryApi {
    /// List product categories
    ///
    /// Returns the configured categories with their withdrawal lead times.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_categories(&self) -> Json<Vec<CategoryResponse>> {
        Json(
            self.get_all_use_case
                .execute()
                .into_iter()
                .map(|c| c.into())
                .collect(),
        )
    }
}
