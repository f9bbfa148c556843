//! Calendar arithmetic on local dates.
//!
//! Every operation works on `NaiveDate`, so the time-of-day component is
//! already discarded before any comparison. Timestamps are truncated with
//! [`to_local_day`] first.

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone};

/// Truncates a timestamp to the calendar date in its own time zone.
pub fn to_local_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.date_naive()
}

/// Adds `n` days (negative to go back). Returns `None` outside chrono's range.
pub fn add_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        date.checked_add_days(Days::new(n as u64))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

/// Adds `n` months (negative to go back).
///
/// When the source day does not exist in the target month the result is
/// clamped to that month's last day, so Jan 31 + 1 month is Feb 28 (or 29).
pub fn add_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    if n >= 0 {
        date.checked_add_months(Months::new(n as u32))
    } else {
        date.checked_sub_months(Months::new(n.unsigned_abs()))
    }
}

/// Signed number of whole days from `from` to `to`; positive when `to` is later.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// True when `date` is today or later.
pub fn is_future_or_today(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}
