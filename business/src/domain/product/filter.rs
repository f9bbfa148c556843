use chrono::NaiveDate;

use super::errors::FilterError;
use super::model::Product;
use super::urgency::{is_expired, is_expiring_within};
use super::value_objects::ProductScope;
use crate::domain::category::model::CategoryId;
use crate::domain::category::registry::CategoryRegistry;
use crate::domain::user::model::CurrentUser;

/// Length of the "this week" window, today included.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Views over a product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    /// Expiring between today and today + 7 days, both inclusive.
    Week,
    Category(CategoryId),
    /// Expiry date before today.
    Expired,
    /// Owned by the viewer.
    Mine,
}

impl ProductFilter {
    /// Parses a filter key. Category ids are resolved against the registry and
    /// anything else is rejected rather than silently treated as `all`.
    pub fn parse(key: &str, registry: &CategoryRegistry) -> Result<Self, FilterError> {
        match key {
            "all" => Ok(ProductFilter::All),
            "week" => Ok(ProductFilter::Week),
            "expired" => Ok(ProductFilter::Expired),
            "mine" | "my" => Ok(ProductFilter::Mine),
            other => {
                let category = CategoryId::new(other);
                if registry.contains(&category) {
                    Ok(ProductFilter::Category(category))
                } else {
                    Err(FilterError::UnknownFilter(other.to_string()))
                }
            }
        }
    }

    pub fn matches(&self, product: &Product, today: NaiveDate, viewer: &CurrentUser) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Week => is_expiring_within(product, today, WEEK_WINDOW_DAYS),
            ProductFilter::Category(category) => &product.category == category,
            ProductFilter::Expired => is_expired(product, today),
            ProductFilter::Mine => product.user_id == viewer.id,
        }
    }
}

impl std::fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductFilter::All => write!(f, "all"),
            ProductFilter::Week => write!(f, "week"),
            ProductFilter::Category(category) => write!(f, "{}", category),
            ProductFilter::Expired => write!(f, "expired"),
            ProductFilter::Mine => write!(f, "mine"),
        }
    }
}

/// Products the viewer may see, in input order.
pub fn visible_to<'a>(
    products: &'a [Product],
    viewer: &'a CurrentUser,
) -> impl Iterator<Item = &'a Product> + 'a {
    let scope = ProductScope::for_viewer(viewer);
    products.iter().filter(move |p| scope.includes(&p.user_id))
}

/// Applies the viewer's scope, then `filter`. The input is left untouched.
pub fn filter_products(
    products: &[Product],
    filter: &ProductFilter,
    today: NaiveDate,
    viewer: &CurrentUser,
) -> Vec<Product> {
    visible_to(products, viewer)
        .filter(|p| filter.matches(p, today, viewer))
        .cloned()
        .collect()
}

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStats {
    pub total: usize,
    pub expiring_this_week: usize,
    pub expired: usize,
}

pub fn product_stats(products: &[Product], today: NaiveDate, viewer: &CurrentUser) -> ProductStats {
    visible_to(products, viewer).fold(ProductStats::default(), |mut stats, product| {
        stats.total += 1;
        if is_expiring_within(product, today, WEEK_WINDOW_DAYS) {
            stats.expiring_this_week += 1;
        }
        if is_expired(product, today) {
            stats.expired += 1;
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::Role;
    use chrono::{Days, Utc};
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn viewer(id: &str, role: Role) -> CurrentUser {
        CurrentUser {
            id: UserId::new(id),
            username: id.to_string(),
            name: id.to_string(),
            role,
        }
    }

    fn product(owner: &str, article: &str, category: &str, expiry: NaiveDate) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            UserId::new(owner),
            article.to_string(),
            format!("Batch {article}"),
            CategoryId::new(category),
            expiry,
            None,
            Utc::now(),
            Utc::now(),
        )
    }

    fn articles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.article.as_str()).collect()
    }

    #[test]
    fn should_keep_week_window_inclusive_on_both_ends() {
        let t = today();
        let products = vec![
            product("ann", "yesterday", "regular", t - Days::new(1)),
            product("ann", "today", "regular", t),
            product("ann", "plus7", "regular", t + Days::new(7)),
            product("ann", "plus8", "regular", t + Days::new(8)),
        ];

        let result = filter_products(&products, &ProductFilter::Week, t, &viewer("ann", Role::User));

        assert_eq!(articles(&result), vec!["today", "plus7"]);
    }

    #[test]
    fn should_return_only_expired_products() {
        let t = today();
        let products = vec![
            product("ann", "old", "regular", t - Days::new(3)),
            product("ann", "fresh", "regular", t),
        ];

        let result =
            filter_products(&products, &ProductFilter::Expired, t, &viewer("ann", Role::User));

        assert_eq!(articles(&result), vec!["old"]);
    }

    #[test]
    fn should_match_category_exactly() {
        let t = today();
        let products = vec![
            product("ann", "a", "regular", t),
            product("ann", "b", "royal", t),
            product("ann", "c", "royal", t),
        ];

        let result = filter_products(
            &products,
            &ProductFilter::Category(CategoryId::new("royal")),
            t,
            &viewer("ann", Role::User),
        );

        assert_eq!(articles(&result), vec!["b", "c"]);
    }

    #[test]
    fn should_return_admin_own_products_when_filter_is_mine() {
        let t = today();
        let products = vec![
            product("boss", "a", "regular", t),
            product("ann", "b", "regular", t),
        ];

        let result = filter_products(&products, &ProductFilter::Mine, t, &viewer("boss", Role::Admin));

        assert_eq!(articles(&result), vec!["a"]);
    }

    #[test]
    fn should_never_show_foreign_products_to_regular_user() {
        let t = today();
        let products = vec![
            product("ann", "mine", "regular", t),
            product("bob", "foreign", "regular", t),
        ];

        let result = filter_products(&products, &ProductFilter::All, t, &viewer("ann", Role::User));

        assert_eq!(articles(&result), vec!["mine"]);
    }

    #[test]
    fn should_show_every_owner_to_admin() {
        let t = today();
        let products = vec![
            product("ann", "a", "regular", t),
            product("bob", "b", "premium", t),
        ];

        let result = filter_products(&products, &ProductFilter::All, t, &viewer("boss", Role::Admin));

        assert_eq!(articles(&result), vec!["a", "b"]);
    }

    #[test]
    fn should_not_mutate_input_when_filtering() {
        let t = today();
        let products = vec![
            product("ann", "a", "regular", t - Days::new(1)),
            product("ann", "b", "regular", t),
        ];
        let snapshot = products.clone();

        let _ = filter_products(&products, &ProductFilter::Expired, t, &viewer("ann", Role::User));

        assert_eq!(products, snapshot);
    }

    #[test]
    fn should_parse_known_filter_keys() {
        let registry = CategoryRegistry::default();

        assert_eq!(ProductFilter::parse("all", &registry).unwrap(), ProductFilter::All);
        assert_eq!(ProductFilter::parse("week", &registry).unwrap(), ProductFilter::Week);
        assert_eq!(ProductFilter::parse("expired", &registry).unwrap(), ProductFilter::Expired);
        assert_eq!(ProductFilter::parse("my", &registry).unwrap(), ProductFilter::Mine);
        assert_eq!(
            ProductFilter::parse("premium", &registry).unwrap(),
            ProductFilter::Category(CategoryId::new("premium"))
        );
    }

    #[test]
    fn should_reject_unknown_filter_key() {
        let result = ProductFilter::parse("wek", &CategoryRegistry::default());

        assert!(matches!(result, Err(FilterError::UnknownFilter(key)) if key == "wek"));
    }

    #[test]
    fn should_count_stats_within_scope() {
        let t = today();
        let products = vec![
            product("ann", "a", "regular", t - Days::new(2)),
            product("ann", "b", "regular", t + Days::new(3)),
            product("ann", "c", "regular", t + Days::new(40)),
            product("bob", "d", "regular", t + Days::new(1)),
        ];

        let stats = product_stats(&products, t, &viewer("ann", Role::User));

        assert_eq!(
            stats,
            ProductStats {
                total: 3,
                expiring_this_week: 1,
                expired: 1,
            }
        );
    }
}
