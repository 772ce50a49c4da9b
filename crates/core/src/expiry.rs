//! Expiry date arithmetic.
//!
//! Expiry values are stored as free text. Only values written as
//! `YYYY-MM-DD` ever match these comparisons; anything else is silently
//! ignored.

use chrono::Days;

use crate::types::{Date, DATE_FORMAT};

/// How far ahead "expiring soon" looks.
pub const EXPIRING_SOON_DAYS: u64 = 7;

/// The single expiry date reported as "expiring soon" on `today`.
///
/// This is an exact day, not a range: items expiring one day earlier or
/// later are not reported.
pub fn expiring_soon_date(today: Date) -> Date {
    today + Days::new(EXPIRING_SOON_DAYS)
}

/// Format a date the way expiry values are stored.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soon_is_exactly_one_week_out() {
        let today = Date::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(format_date(expiring_soon_date(today)), "2025-01-10");
    }

    #[test]
    fn soon_rolls_over_year_end() {
        let today = Date::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(format_date(expiring_soon_date(today)), "2025-01-04");
    }
}
