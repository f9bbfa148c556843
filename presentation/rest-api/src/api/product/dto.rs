use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::category::registry::CategoryRegistry;
use business::domain::product::calculator::schedule_for;
use business::domain::product::filter::ProductStats;
use business::domain::product::model::Product;
use business::domain::product::urgency::{UrgencyPolicy, days_until_expiry};

use crate::api::calculator::dto::WithdrawalResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Article code (cannot be empty)
    pub article: String,
    /// Product name (cannot be empty)
    pub name: String,
    /// Category identifier, e.g. `regular`
    pub category: String,
    /// Expiry date, today or later
    pub expiry_date: NaiveDate,
}

/// Full replacement of the editable fields
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub article: String,
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub article: String,
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
    /// Negative for expired batches
    pub days_until_expiry: i64,
    pub owner_id: String,
    /// Present in the administrator's all-owners listing only
    #[oai(skip_serializing_if_is_none)]
    pub owner_username: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub owner_name: Option<String>,
    /// Withdrawal deadline for the product's category
    #[oai(skip_serializing_if_is_none)]
    pub withdrawal: Option<WithdrawalResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn build(
        product: Product,
        today: NaiveDate,
        registry: &CategoryRegistry,
        policy: &UrgencyPolicy,
    ) -> Self {
        // categories removed from the table after the product was stored have no schedule
        let withdrawal = schedule_for(&product, today, registry, policy)
            .ok()
            .map(WithdrawalResponse::from);
        let days_until_expiry = days_until_expiry(&product, today);
        let (owner_username, owner_name) = match product.ownership {
            Some(o) => (Some(o.owner_username), Some(o.owner_name)),
            None => (None, None),
        };

        Self {
            id: product.id.to_string(),
            article: product.article,
            name: product.name,
            category: product.category.to_string(),
            expiry_date: product.expiry_date,
            days_until_expiry,
            owner_id: product.user_id.to_string(),
            owner_username,
            owner_name,
            withdrawal,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductStatsResponse {
    pub total: u64,
    /// Expiring between today and seven days from now
    pub expiring_this_week: u64,
    pub expired: u64,
}

impl From<ProductStats> for ProductStatsResponse {
    fn from(stats: ProductStats) -> Self {
        Self {
            total: stats.total as u64,
            expiring_this_week: stats.expiring_this_week as u64,
            expired: stats.expired as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CleanupResponse {
    /// Number of purged products
    pub purged: u64,
}
