use crate::domain::category::model::Category;

pub trait GetCategoriesUseCase: Send + Sync {
    fn execute(&self) -> Vec<Category>;
}
