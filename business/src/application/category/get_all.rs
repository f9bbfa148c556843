use std::sync::Arc;

use crate::domain::category::model::Category;
use crate::domain::category::registry::CategoryRegistry;
use crate::domain::category::use_cases::get_all::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub registry: Arc<CategoryRegistry>,
}

impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    fn execute(&self) -> Vec<Category> {
        self.registry.list().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_categories_in_registry_order() {
        let use_case = GetCategoriesUseCaseImpl {
            registry: Arc::new(CategoryRegistry::default()),
        };

        let ids: Vec<String> = use_case
            .execute()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();

        assert_eq!(ids, vec!["regular", "royal", "premium"]);
    }
}
