use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::CategoryId;
use business::domain::product::model::Product;
use business::domain::product::value_objects::OwnershipAnnotation;
use business::domain::shared::value_objects::UserId;

/// Row of `products`, optionally joined with the owning user.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub user_id: String,
    pub article: String,
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
    pub owner_username: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let ownership = match (self.owner_username, self.owner_name) {
            (Some(owner_username), Some(owner_name)) => Some(OwnershipAnnotation {
                owner_username,
                owner_name,
            }),
            _ => None,
        };

        Product::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.article,
            self.name,
            CategoryId::new(self.category),
            self.expiry_date,
            ownership,
            self.created_at,
            self.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(owner_username: Option<&str>, owner_name: Option<&str>) -> ProductEntity {
        ProductEntity {
            id: Uuid::new_v4(),
            user_id: "u-1".to_string(),
            article: "A-100".to_string(),
            name: "Dry food".to_string(),
            category: "royal".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            owner_username: owner_username.map(str::to_string),
            owner_name: owner_name.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_row_without_owner_columns() {
        let product = entity(None, None).into_domain();

        assert_eq!(product.user_id, UserId::new("u-1"));
        assert_eq!(product.category, CategoryId::new("royal"));
        assert!(product.ownership.is_none());
    }

    #[test]
    fn should_attach_ownership_when_joined_with_user() {
        let product = entity(Some("ann"), Some("Ann")).into_domain();

        assert_eq!(
            product.ownership,
            Some(OwnershipAnnotation {
                owner_username: "ann".to_string(),
                owner_name: "Ann".to_string(),
            })
        );
    }
}
