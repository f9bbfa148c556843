use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Identifier used in product payloads and as a filter key
    pub id: String,
    /// Days before expiry by which a batch must be withdrawn
    pub lead_time_days: u32,
    pub name: String,
    pub description: String,
    /// CSS color
    pub color: String,
    /// Font Awesome icon class
    pub icon: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            lead_time_days: category.lead_time_days,
            name: category.metadata.name,
            description: category.metadata.description,
            color: category.metadata.color,
            icon: category.metadata.icon,
        }
    }
}
