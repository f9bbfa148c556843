use std::collections::HashSet;

use super::errors::CategoryError;
use super::model::{Category, CategoryId, CategoryMetadata};

/// Immutable table of the categories known to the process.
///
/// Built once at start-up, either from [`CategoryRegistry::default`] or from a
/// JSON document, and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Validates and wraps a category list. Order is kept for display.
    pub fn new(categories: Vec<Category>) -> Result<Self, CategoryError> {
        if categories.is_empty() {
            return Err(CategoryError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.lead_time_days == 0 {
                return Err(CategoryError::InvalidLeadTime(category.id.to_string()));
            }
            if !seen.insert(category.id.clone()) {
                return Err(CategoryError::Duplicated(category.id.to_string()));
            }
        }

        Ok(Self { categories })
    }

    /// Parses a JSON array of `{id, lead_time_days, name, description, color, icon}`.
    pub fn from_json(json: &str) -> Result<Self, CategoryError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn get(&self, id: &CategoryId) -> Result<&Category, CategoryError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CategoryError::Unknown(id.to_string()))
    }

    pub fn lead_time_days(&self, id: &CategoryId) -> Result<u32, CategoryError> {
        self.get(id).map(|c| c.lead_time_days)
    }

    pub fn metadata(&self, id: &CategoryId) -> Result<&CategoryMetadata, CategoryError> {
        self.get(id).map(|c| &c.metadata)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.categories.iter().any(|c| &c.id == id)
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "regular",
                    75,
                    "Корма+Ветка",
                    "Сдавать за 2 месяца и 2 недели (75 дней)",
                    "#4A90E2",
                    "fas fa-bone",
                ),
                Category::new(
                    "royal",
                    135,
                    "AVZ, JARVI, Royal Canin, Eukanuba",
                    "Сдавать за 4 месяца и 2 недели (135 дней)",
                    "#9F7AEA",
                    "fas fa-crown",
                ),
                Category::new(
                    "premium",
                    165,
                    "Award, Best Diner, Edel Cat/Dog",
                    "Сдавать за 5 месяцев и 2 недели (165 дней)",
                    "#38A169",
                    "fas fa-medal",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_default_lead_times() {
        let registry = CategoryRegistry::default();

        assert_eq!(registry.lead_time_days(&"regular".into()).unwrap(), 75);
        assert_eq!(registry.lead_time_days(&"royal".into()).unwrap(), 135);
        assert_eq!(registry.lead_time_days(&"premium".into()).unwrap(), 165);
    }

    #[test]
    fn should_return_metadata_for_known_category() {
        let registry = CategoryRegistry::default();

        let metadata = registry.metadata(&"royal".into()).unwrap();

        assert_eq!(metadata.color, "#9F7AEA");
        assert_eq!(metadata.icon, "fas fa-crown");
    }

    #[test]
    fn should_fail_with_unknown_category_when_id_not_registered() {
        let registry = CategoryRegistry::default();

        let result = registry.lead_time_days(&"economy".into());

        assert!(matches!(result, Err(CategoryError::Unknown(id)) if id == "economy"));
        assert!(!registry.contains(&"economy".into()));
    }

    #[test]
    fn should_load_categories_from_json() {
        let json = r##"[
            {"id": "regular", "lead_time_days": 75, "name": "Regular", "description": "", "color": "#000", "icon": "fas fa-bone"},
            {"id": "frozen", "lead_time_days": 30, "name": "Frozen", "description": "", "color": "#fff", "icon": "fas fa-snowflake"}
        ]"##;

        let registry = CategoryRegistry::from_json(json).unwrap();

        assert_eq!(registry.list().len(), 2);
        assert_eq!(registry.lead_time_days(&"frozen".into()).unwrap(), 30);
        assert_eq!(registry.list()[0].id.as_str(), "regular");
    }

    #[test]
    fn should_reject_empty_registry() {
        assert!(matches!(
            CategoryRegistry::new(vec![]),
            Err(CategoryError::EmptyRegistry)
        ));
    }

    #[test]
    fn should_reject_zero_lead_time() {
        let result = CategoryRegistry::new(vec![Category::new("x", 0, "X", "", "", "")]);

        assert!(matches!(result, Err(CategoryError::InvalidLeadTime(_))));
    }

    #[test]
    fn should_reject_duplicated_ids() {
        let result = CategoryRegistry::new(vec![
            Category::new("x", 10, "X", "", "", ""),
            Category::new("x", 20, "X again", "", "", ""),
        ]);

        assert!(matches!(result, Err(CategoryError::Duplicated(id)) if id == "x"));
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = CategoryRegistry::from_json("{not json");

        assert!(matches!(result, Err(CategoryError::InvalidConfiguration(_))));
    }
}
