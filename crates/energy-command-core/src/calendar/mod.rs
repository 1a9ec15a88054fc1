//! Calendar arithmetic and display formatting.
//!
//! Formatting uses chrono's built-in English names, so labels do not depend
//! on the host locale.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::energy::MonthKey;
use crate::error::ValidationError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month identified by `key` (28-31).
pub fn days_in_month(key: MonthKey) -> u32 {
    match key.month0() {
        1 if is_leap_year(key.year()) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Display label such as `February 2024`.
pub fn month_label(key: MonthKey) -> String {
    format!("{} {}", MONTH_NAMES[key.month0() as usize], key.year())
}

/// First day of the month `offset` months away from `date`'s month.
///
/// Rolls over year boundaries in both directions. Returns `None` only when
/// the result leaves chrono's representable range.
pub fn adjacent_month(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let months = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }
}

/// Short label such as `Feb 3`.
pub fn format_short_date(date: &NaiveDateTime) -> String {
    date.format("%b %-d").to_string()
}

/// Full weekday name such as `Saturday`.
pub fn format_weekday(date: &NaiveDateTime) -> String {
    date.format("%A").to_string()
}

/// Parse `YYYY-MM` into a month key.
pub fn parse_month(input: &str) -> Result<MonthKey, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        input: input.to_string(),
        expected: "YYYY-MM",
    };
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if month == 0 {
        return Err(invalid());
    }
    MonthKey::new(year, month - 1)
}

/// Parse `YYYY-MM-DD` into a date.
pub fn parse_day(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        input: input.to_string(),
        expected: "YYYY-MM-DD",
    })
}
