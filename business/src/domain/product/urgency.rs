use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::CalculationError;
use super::model::Product;
use crate::domain::shared::dates::days_between;

/// Urgency tiers for a withdrawal deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyLevel {
    /// The deadline has passed.
    Overdue,
    /// The deadline is today.
    DueToday,
    /// Within the week threshold.
    DueThisWeek,
    /// Within the month threshold.
    DueThisMonth,
    /// Further out than the month threshold.
    DueLater,
}

impl UrgencyLevel {
    pub fn severity(&self) -> Severity {
        match self {
            UrgencyLevel::Overdue | UrgencyLevel::DueToday => Severity::Critical,
            UrgencyLevel::DueThisWeek => Severity::Warning,
            UrgencyLevel::DueThisMonth => Severity::Info,
            UrgencyLevel::DueLater => Severity::Success,
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyLevel::Overdue => write!(f, "overdue"),
            UrgencyLevel::DueToday => write!(f, "due-today"),
            UrgencyLevel::DueThisWeek => write!(f, "due-this-week"),
            UrgencyLevel::DueThisMonth => write!(f, "due-this-month"),
            UrgencyLevel::DueLater => write!(f, "due-later"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
        }
    }
}

/// Thresholds used to classify a withdrawal deadline.
///
/// Loaded from configuration; [`UrgencyPolicy::default`] holds the values the
/// warehouse works with today. Every instance has passed [`UrgencyPolicy::new`],
/// deserialized ones included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UrgencyThresholds", into = "UrgencyThresholds")]
pub struct UrgencyPolicy {
    week_days: i64,
    month_days: i64,
    days_per_month: i64,
    register_window_days: i64,
}

/// Unchecked wire form of [`UrgencyPolicy`]; only reachable through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    week_days: i64,
    month_days: i64,
    days_per_month: i64,
    register_window_days: i64,
}

impl TryFrom<UrgencyThresholds> for UrgencyPolicy {
    type Error = CalculationError;

    fn try_from(raw: UrgencyThresholds) -> Result<Self, Self::Error> {
        UrgencyPolicy::new(
            raw.week_days,
            raw.month_days,
            raw.days_per_month,
            raw.register_window_days,
        )
    }
}

impl From<UrgencyPolicy> for UrgencyThresholds {
    fn from(policy: UrgencyPolicy) -> Self {
        Self {
            week_days: policy.week_days,
            month_days: policy.month_days,
            days_per_month: policy.days_per_month,
            register_window_days: policy.register_window_days,
        }
    }
}

impl UrgencyPolicy {
    pub fn new(
        week_days: i64,
        month_days: i64,
        days_per_month: i64,
        register_window_days: i64,
    ) -> Result<Self, CalculationError> {
        if week_days < 1 {
            return Err(CalculationError::InvalidInput("week_days"));
        }
        if month_days < week_days {
            return Err(CalculationError::InvalidInput("month_days"));
        }
        if days_per_month < 1 {
            return Err(CalculationError::InvalidInput("days_per_month"));
        }
        if register_window_days < 0 {
            return Err(CalculationError::InvalidInput("register_window_days"));
        }

        Ok(Self {
            week_days,
            month_days,
            days_per_month,
            register_window_days,
        })
    }

    /// Upper bound (inclusive) of `due-this-week`.
    pub fn week_days(&self) -> i64 {
        self.week_days
    }

    /// Upper bound (inclusive) of `due-this-month`.
    pub fn month_days(&self) -> i64 {
        self.month_days
    }

    /// Length of a month when splitting a countdown into months and days; never zero.
    pub fn days_per_month(&self) -> i64 {
        self.days_per_month
    }

    /// Deadlines up to this many days away may be registered for tracking.
    pub fn register_window_days(&self) -> i64 {
        self.register_window_days
    }

    /// Classifies the number of days left until a deadline.
    pub fn classify(&self, days_until: i64) -> UrgencyLevel {
        if days_until < 0 {
            UrgencyLevel::Overdue
        } else if days_until == 0 {
            UrgencyLevel::DueToday
        } else if days_until <= self.week_days {
            UrgencyLevel::DueThisWeek
        } else if days_until <= self.month_days {
            UrgencyLevel::DueThisMonth
        } else {
            UrgencyLevel::DueLater
        }
    }

    pub fn offers_registration(&self, days_until: i64) -> bool {
        (0..=self.register_window_days).contains(&days_until)
    }
}

impl Default for UrgencyPolicy {
    fn default() -> Self {
        Self {
            week_days: 7,
            month_days: 30,
            days_per_month: 30,
            register_window_days: 90,
        }
    }
}

/// Days from `today` until the product's expiry date.
///
/// Returns 0 for products expiring today, negative for expired products.
pub fn days_until_expiry(product: &Product, today: NaiveDate) -> i64 {
    days_between(today, product.expiry_date)
}

/// Returns true if the expiry date is before `today`.
pub fn is_expired(product: &Product, today: NaiveDate) -> bool {
    product.expiry_date < today
}

/// Returns true if the product expires between today and `window_days` from now.
pub fn is_expiring_within(product: &Product, today: NaiveDate, window_days: i64) -> bool {
    (0..=window_days).contains(&days_until_expiry(product, today))
}
