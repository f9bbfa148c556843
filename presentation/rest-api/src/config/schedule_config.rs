use anyhow::Context;
use std::env;

use business::domain::category::registry::CategoryRegistry;
use business::domain::product::urgency::UrgencyPolicy;

/// Category table and urgency thresholds used by every date computation
pub struct ScheduleConfig {
    pub registry: CategoryRegistry,
    pub policy: UrgencyPolicy,
}

impl ScheduleConfig {
    /// Environment variables:
    /// - CATEGORIES_PATH: JSON file with the category table (default: built-in categories)
    /// - URGENCY_WEEK_DAYS (default: 7), URGENCY_MONTH_DAYS (default: 30)
    /// - DAYS_PER_MONTH (default: 30), REGISTER_WINDOW_DAYS (default: 90)
    pub fn from_env() -> anyhow::Result<Self> {
        let registry = match env::var("CATEGORIES_PATH") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read categories from {path}"))?;
                CategoryRegistry::from_json(&json)
                    .with_context(|| format!("invalid category table in {path}"))?
            }
            Err(_) => CategoryRegistry::default(),
        };

        let policy = policy_from(|key| env::var(key).ok())?;

        Ok(Self { registry, policy })
    }
}

fn policy_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<UrgencyPolicy> {
    let defaults = UrgencyPolicy::default();
    let read = |key: &str, default: i64| -> anyhow::Result<i64> {
        match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("{key} must be an integer")),
            None => Ok(default),
        }
    };

    let policy = UrgencyPolicy::new(
        read("URGENCY_WEEK_DAYS", defaults.week_days())?,
        read("URGENCY_MONTH_DAYS", defaults.month_days())?,
        read("DAYS_PER_MONTH", defaults.days_per_month())?,
        read("REGISTER_WINDOW_DAYS", defaults.register_window_days())?,
    )
    .context("inconsistent urgency thresholds")?;

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_use_defaults_when_nothing_configured() {
        let policy = policy_from(lookup(&[])).unwrap();

        assert_eq!(policy, UrgencyPolicy::default());
    }

    #[test]
    fn should_override_thresholds_from_environment() {
        let policy =
            policy_from(lookup(&[("URGENCY_WEEK_DAYS", "5"), ("REGISTER_WINDOW_DAYS", "60")]))
                .unwrap();

        assert_eq!(policy.week_days(), 5);
        assert_eq!(policy.month_days(), 30);
        assert_eq!(policy.register_window_days(), 60);
    }

    #[test]
    fn should_reject_non_numeric_threshold() {
        assert!(policy_from(lookup(&[("DAYS_PER_MONTH", "thirty")])).is_err());
    }
}
