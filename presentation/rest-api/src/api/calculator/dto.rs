use chrono::NaiveDate;
use poem_openapi::{Enum, Object};

use business::domain::product::calculator::WithdrawalSchedule;
use business::domain::product::urgency::{Severity, UrgencyLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum UrgencyDto {
    #[oai(rename = "overdue")]
    Overdue,
    #[oai(rename = "due-today")]
    DueToday,
    #[oai(rename = "due-this-week")]
    DueThisWeek,
    #[oai(rename = "due-this-month")]
    DueThisMonth,
    #[oai(rename = "due-later")]
    DueLater,
}

impl From<UrgencyLevel> for UrgencyDto {
    fn from(level: UrgencyLevel) -> Self {
        match level {
            UrgencyLevel::Overdue => UrgencyDto::Overdue,
            UrgencyLevel::DueToday => UrgencyDto::DueToday,
            UrgencyLevel::DueThisWeek => UrgencyDto::DueThisWeek,
            UrgencyLevel::DueThisMonth => UrgencyDto::DueThisMonth,
            UrgencyLevel::DueLater => UrgencyDto::DueLater,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SeverityDto {
    #[oai(rename = "critical")]
    Critical,
    #[oai(rename = "warning")]
    Warning,
    #[oai(rename = "info")]
    Info,
    #[oai(rename = "success")]
    Success,
}

impl From<Severity> for SeverityDto {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => SeverityDto::Critical,
            Severity::Warning => SeverityDto::Warning,
            Severity::Info => SeverityDto::Info,
            Severity::Success => SeverityDto::Success,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryRequest {
    /// Production date of the batch
    #[oai(skip_serializing_if_is_none)]
    pub production_date: Option<NaiveDate>,
    /// Shelf life in whole months (positive)
    pub shelf_life_months: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryResponse {
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, Object)]
pub struct WithdrawalRequest {
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
    /// Category identifier, e.g. `regular`
    pub category: String,
}

#[derive(Debug, Clone, Object)]
pub struct WithdrawalResponse {
    pub expiry_date: NaiveDate,
    pub category: String,
    pub lead_time_days: u32,
    /// Last day the batch may stay in stock
    pub deadline: NaiveDate,
    /// Negative once the deadline has passed
    pub days_until: i64,
    pub urgency: UrgencyDto,
    pub severity: SeverityDto,
    #[oai(skip_serializing_if_is_none)]
    pub overdue_by: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub months_left: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub days_left: Option<i64>,
    /// Human readable countdown
    pub countdown: String,
    /// Whether the deadline is close enough to register the batch
    pub offer_registration: bool,
}

impl From<WithdrawalSchedule> for WithdrawalResponse {
    fn from(schedule: WithdrawalSchedule) -> Self {
        let countdown = schedule.countdown();
        let severity = schedule.severity().into();
        Self {
            expiry_date: schedule.expiry_date,
            category: schedule.category.to_string(),
            lead_time_days: schedule.lead_time_days,
            deadline: schedule.deadline,
            days_until: schedule.days_until,
            urgency: schedule.urgency.into(),
            severity,
            overdue_by: schedule.overdue_by,
            months_left: schedule.time_left.map(|t| t.months),
            days_left: schedule.time_left.map(|t| t.days),
            countdown,
            offer_registration: schedule.offer_registration,
        }
    }
}
