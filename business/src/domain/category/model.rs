use serde::{Deserialize, Serialize};

/// Identifier of a product category, e.g. `regular` or `premium`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Display data shown next to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetadata {
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

/// A product category and how many days before expiry its batches must be withdrawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub lead_time_days: u32,
    #[serde(flatten)]
    pub metadata: CategoryMetadata,
}

impl Category {
    pub fn new(
        id: &str,
        lead_time_days: u32,
        name: &str,
        description: &str,
        color: &str,
        icon: &str,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            lead_time_days,
            metadata: CategoryMetadata {
                name: name.to_string(),
                description: description.to_string(),
                color: color.to_string(),
                icon: icon.to_string(),
            },
        }
    }
}
