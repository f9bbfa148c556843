//! Expiry and withdrawal-deadline computations.
//!
//! Everything here is pure: callers pass `today`, the category registry and
//! the urgency policy explicitly.

use chrono::NaiveDate;
use serde::Serialize;

use super::errors::CalculationError;
use super::model::Product;
use super::urgency::{Severity, UrgencyLevel, UrgencyPolicy};
use crate::domain::category::model::CategoryId;
use crate::domain::category::registry::CategoryRegistry;
use crate::domain::shared::dates::{add_days, add_months, days_between};
use crate::domain::shared::plural::{day_word, month_word};

/// Expiry date of a batch produced on `production_date` with the given shelf life.
pub fn expiry_from_production(
    production_date: Option<NaiveDate>,
    shelf_life_months: i64,
) -> Result<NaiveDate, CalculationError> {
    let production_date =
        production_date.ok_or(CalculationError::InvalidInput("production_date"))?;

    if shelf_life_months <= 0 {
        return Err(CalculationError::InvalidInput("shelf_life_months"));
    }
    let months = i32::try_from(shelf_life_months)
        .map_err(|_| CalculationError::InvalidInput("shelf_life_months"))?;

    add_months(production_date, months).ok_or(CalculationError::InvalidInput("shelf_life_months"))
}

/// Whole months and remaining days of a long countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub months: i64,
    pub days: i64,
}

/// Withdrawal deadline of a batch and how urgent it is relative to `today`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawalSchedule {
    pub expiry_date: NaiveDate,
    pub category: CategoryId,
    pub lead_time_days: u32,
    pub deadline: NaiveDate,
    /// Negative once the deadline has passed.
    pub days_until: i64,
    pub urgency: UrgencyLevel,
    /// Set only for overdue deadlines.
    pub overdue_by: Option<i64>,
    /// Set only for `due-later` deadlines.
    pub time_left: Option<TimeLeft>,
    pub offer_registration: bool,
}

impl WithdrawalSchedule {
    pub fn severity(&self) -> Severity {
        self.urgency.severity()
    }

    /// Countdown phrase shown to staff, e.g. "Осталось 2 месяца и 5 дней".
    pub fn countdown(&self) -> String {
        let days = self.days_until;
        match self.urgency {
            UrgencyLevel::Overdue => {
                let overdue = self.overdue_by.unwrap_or(-days);
                format!("Дата сдачи прошла {} {} назад", overdue, day_word(overdue))
            }
            UrgencyLevel::DueToday => "Сдать сегодня".to_string(),
            UrgencyLevel::DueThisWeek | UrgencyLevel::DueThisMonth => {
                format!("Осталось {} {}", days, day_word(days))
            }
            UrgencyLevel::DueLater => match self.time_left {
                Some(TimeLeft { months, days: rest }) if months > 0 => {
                    let mut text = format!("Осталось {} {}", months, month_word(months));
                    if rest > 0 {
                        text.push_str(&format!(" и {} {}", rest, day_word(rest)));
                    }
                    text
                }
                _ => format!("Осталось {} {}", days, day_word(days)),
            },
        }
    }
}

/// Computes the withdrawal deadline for a batch and classifies it against `today`.
pub fn withdrawal_schedule(
    expiry_date: Option<NaiveDate>,
    category: &CategoryId,
    today: NaiveDate,
    registry: &CategoryRegistry,
    policy: &UrgencyPolicy,
) -> Result<WithdrawalSchedule, CalculationError> {
    let expiry_date = expiry_date.ok_or(CalculationError::InvalidInput("expiry_date"))?;
    let lead_time_days = registry.lead_time_days(category)?;

    let deadline = add_days(expiry_date, -i64::from(lead_time_days))
        .ok_or(CalculationError::InvalidInput("expiry_date"))?;
    let days_until = days_between(today, deadline);
    let urgency = policy.classify(days_until);

    let overdue_by = (urgency == UrgencyLevel::Overdue).then_some(-days_until);
    let time_left = (urgency == UrgencyLevel::DueLater).then(|| TimeLeft {
        months: days_until / policy.days_per_month(),
        days: days_until % policy.days_per_month(),
    });

    Ok(WithdrawalSchedule {
        expiry_date,
        category: category.clone(),
        lead_time_days,
        deadline,
        days_until,
        urgency,
        overdue_by,
        time_left,
        offer_registration: policy.offers_registration(days_until),
    })
}

/// Withdrawal schedule of a stored product.
pub fn schedule_for(
    product: &Product,
    today: NaiveDate,
    registry: &CategoryRegistry,
    policy: &UrgencyPolicy,
) -> Result<WithdrawalSchedule, CalculationError> {
    withdrawal_schedule(
        Some(product.expiry_date),
        &product.category,
        today,
        registry,
        policy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::errors::CategoryError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn schedule(expiry: NaiveDate, category: &str) -> WithdrawalSchedule {
        withdrawal_schedule(
            Some(expiry),
            &CategoryId::new(category),
            today(),
            &CategoryRegistry::default(),
            &UrgencyPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn should_add_shelf_life_to_production_date() {
        let expiry = expiry_from_production(Some(date(2024, 1, 15)), 18).unwrap();

        assert_eq!(expiry, date(2025, 7, 15));
    }

    #[test]
    fn should_clamp_expiry_to_month_end() {
        let expiry = expiry_from_production(Some(date(2023, 8, 31)), 6).unwrap();

        assert_eq!(expiry, date(2024, 2, 29));
    }

    #[test]
    fn should_reject_missing_production_date() {
        let result = expiry_from_production(None, 18);

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput("production_date"))
        ));
    }

    #[test]
    fn should_reject_non_positive_shelf_life() {
        for months in [0, -3] {
            let result = expiry_from_production(Some(today()), months);
            assert!(matches!(
                result,
                Err(CalculationError::InvalidInput("shelf_life_months"))
            ));
        }
    }

    #[test]
    fn should_be_due_today_when_deadline_is_today() {
        let result = schedule(date(2024, 8, 15), "regular");

        assert_eq!(result.deadline, today());
        assert_eq!(result.days_until, 0);
        assert_eq!(result.urgency, UrgencyLevel::DueToday);
        assert_eq!(result.severity(), Severity::Critical);
        assert!(result.offer_registration);
        assert_eq!(result.countdown(), "Сдать сегодня");
    }

    #[test]
    fn should_be_due_this_week_when_deadline_is_tomorrow() {
        let result = schedule(date(2024, 8, 16), "regular");

        assert_eq!(result.days_until, 1);
        assert_eq!(result.urgency, UrgencyLevel::DueThisWeek);
        assert_eq!(result.severity(), Severity::Warning);
        assert_eq!(result.countdown(), "Осталось 1 день");
    }

    #[test]
    fn should_be_overdue_when_deadline_was_yesterday() {
        let result = schedule(date(2024, 8, 14), "regular");

        assert_eq!(result.urgency, UrgencyLevel::Overdue);
        assert_eq!(result.overdue_by, Some(1));
        assert!(!result.offer_registration);
        assert_eq!(result.countdown(), "Дата сдачи прошла 1 день назад");
    }

    #[test]
    fn should_be_due_this_month_within_thirty_days() {
        let result = schedule(date(2024, 8, 15) + chrono::Days::new(22), "regular");

        assert_eq!(result.days_until, 22);
        assert_eq!(result.urgency, UrgencyLevel::DueThisMonth);
        assert_eq!(result.severity(), Severity::Info);
        assert_eq!(result.countdown(), "Осталось 22 дня");
    }

    #[test]
    fn should_split_long_countdown_into_months_and_days() {
        // 135 lead days + 65 days of margin
        let expiry = date(2024, 6, 1) + chrono::Days::new(135 + 65);

        let result = schedule(expiry, "royal");

        assert_eq!(result.days_until, 65);
        assert_eq!(result.urgency, UrgencyLevel::DueLater);
        assert_eq!(result.severity(), Severity::Success);
        assert_eq!(result.time_left, Some(TimeLeft { months: 2, days: 5 }));
        assert_eq!(result.countdown(), "Осталось 2 месяца и 5 дней");
        assert!(result.offer_registration);
    }

    #[test]
    fn should_omit_days_when_countdown_is_whole_months() {
        let expiry = date(2024, 6, 1) + chrono::Days::new(165 + 150);

        let result = schedule(expiry, "premium");

        assert_eq!(result.time_left, Some(TimeLeft { months: 5, days: 0 }));
        assert_eq!(result.countdown(), "Осталось 5 месяцев");
        assert!(!result.offer_registration);
    }

    #[test]
    fn should_stop_offering_registration_past_ninety_days() {
        let at_limit = schedule(date(2024, 6, 1) + chrono::Days::new(75 + 90), "regular");
        let past_limit = schedule(date(2024, 6, 1) + chrono::Days::new(75 + 91), "regular");

        assert!(at_limit.offer_registration);
        assert!(!past_limit.offer_registration);
    }

    #[test]
    fn should_reject_missing_expiry_date() {
        let result = withdrawal_schedule(
            None,
            &CategoryId::new("regular"),
            today(),
            &CategoryRegistry::default(),
            &UrgencyPolicy::default(),
        );

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput("expiry_date"))
        ));
    }

    #[test]
    fn should_propagate_unknown_category() {
        let result = withdrawal_schedule(
            Some(date(2024, 9, 1)),
            &CategoryId::new("economy"),
            today(),
            &CategoryRegistry::default(),
            &UrgencyPolicy::default(),
        );

        assert!(matches!(
            result,
            Err(CalculationError::UnknownCategory(CategoryError::Unknown(_)))
        ));
    }

    #[test]
    fn should_use_policy_month_length_for_decomposition() {
        let policy = UrgencyPolicy::new(7, 30, 28, 90).unwrap();

        let result = withdrawal_schedule(
            Some(date(2024, 6, 1) + chrono::Days::new(75 + 60)),
            &CategoryId::new("regular"),
            today(),
            &CategoryRegistry::default(),
            &policy,
        )
        .unwrap();

        assert_eq!(result.time_left, Some(TimeLeft { months: 2, days: 4 }));
    }
}
