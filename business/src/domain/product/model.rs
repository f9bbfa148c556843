use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::OwnershipAnnotation;
use crate::domain::category::model::CategoryId;
use crate::domain::category::registry::CategoryRegistry;
use crate::domain::shared::dates::is_future_or_today;
use crate::domain::shared::value_objects::UserId;

/// A stocked batch of one article with a known expiry date.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub user_id: UserId,
    pub article: String,
    pub name: String,
    pub category: CategoryId,
    pub expiry_date: NaiveDate,
    /// Only set by the all-owners listing.
    pub ownership: Option<OwnershipAnnotation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a product; used both to create and to replace.
pub struct ProductFields {
    pub article: String,
    pub name: String,
    pub category: CategoryId,
    pub expiry_date: NaiveDate,
}

impl ProductFields {
    /// Trims text fields and checks them against the registry and `today`.
    fn validate(
        self,
        registry: &CategoryRegistry,
        today: NaiveDate,
    ) -> Result<Self, ProductError> {
        let article = self.article.trim().to_string();
        if article.is_empty() {
            return Err(ProductError::ArticleEmpty);
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        registry.get(&self.category)?;

        if !is_future_or_today(self.expiry_date, today) {
            return Err(ProductError::ExpiryDateInPast);
        }

        Ok(Self {
            article,
            name,
            category: self.category,
            expiry_date: self.expiry_date,
        })
    }
}

impl Product {
    pub fn new(
        user_id: UserId,
        fields: ProductFields,
        registry: &CategoryRegistry,
        today: NaiveDate,
    ) -> Result<Self, ProductError> {
        let fields = fields.validate(registry, today)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            article: fields.article,
            name: fields.name,
            category: fields.category,
            expiry_date: fields.expiry_date,
            ownership: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the editable fields. Id, owner and creation time are kept.
    pub fn revise(
        &self,
        fields: ProductFields,
        registry: &CategoryRegistry,
        today: NaiveDate,
    ) -> Result<Self, ProductError> {
        let fields = fields.validate(registry, today)?;

        Ok(Self {
            id: self.id,
            user_id: self.user_id.clone(),
            article: fields.article,
            name: fields.name,
            category: fields.category,
            expiry_date: fields.expiry_date,
            ownership: self.ownership.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// True when both products record the same article with the same expiry date.
    pub fn same_batch_as(&self, article: &str, expiry_date: NaiveDate) -> bool {
        self.article == article && self.expiry_date == expiry_date
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        article: String,
        name: String,
        category: CategoryId,
        expiry_date: NaiveDate,
        ownership: Option<OwnershipAnnotation>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            article,
            name,
            category,
            expiry_date,
            ownership,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn fields(article: &str, name: &str, category: &str, expiry: NaiveDate) -> ProductFields {
        ProductFields {
            article: article.to_string(),
            name: name.to_string(),
            category: CategoryId::new(category),
            expiry_date: expiry,
        }
    }

    #[test]
    fn should_create_product_when_fields_valid() {
        let registry = CategoryRegistry::default();

        let product = Product::new(
            UserId::new("picker"),
            fields("  A-1001 ", " Dry food 15kg ", "regular", today()),
            &registry,
            today(),
        )
        .unwrap();

        assert_eq!(product.article, "A-1001");
        assert_eq!(product.name, "Dry food 15kg");
        assert_eq!(product.user_id, UserId::new("picker"));
        assert!(product.ownership.is_none());
    }

    #[test]
    fn should_reject_when_article_blank() {
        let result = Product::new(
            UserId::new("picker"),
            fields("   ", "Dry food", "regular", today()),
            &CategoryRegistry::default(),
            today(),
        );

        assert!(matches!(result, Err(ProductError::ArticleEmpty)));
    }

    #[test]
    fn should_reject_when_name_blank() {
        let result = Product::new(
            UserId::new("picker"),
            fields("A-1", "", "regular", today()),
            &CategoryRegistry::default(),
            today(),
        );

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_when_category_unknown() {
        let result = Product::new(
            UserId::new("picker"),
            fields("A-1", "Dry food", "economy", today()),
            &CategoryRegistry::default(),
            today(),
        );

        assert!(matches!(result, Err(ProductError::UnknownCategory(_))));
    }

    #[test]
    fn should_reject_when_expiry_date_in_past() {
        let yesterday = today().pred_opt().unwrap();

        let result = Product::new(
            UserId::new("picker"),
            fields("A-1", "Dry food", "regular", yesterday),
            &CategoryRegistry::default(),
            today(),
        );

        assert!(matches!(result, Err(ProductError::ExpiryDateInPast)));
    }

    #[test]
    fn should_keep_identity_when_revised() {
        let registry = CategoryRegistry::default();
        let original = Product::new(
            UserId::new("picker"),
            fields("A-1", "Dry food", "regular", today()),
            &registry,
            today(),
        )
        .unwrap();

        let later = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let revised = original
            .revise(fields("A-2", "Wet food", "premium", later), &registry, today())
            .unwrap();

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.user_id, original.user_id);
        assert_eq!(revised.created_at, original.created_at);
        assert_eq!(revised.article, "A-2");
        assert_eq!(revised.category, CategoryId::new("premium"));
        assert_eq!(revised.expiry_date, later);
    }
}
