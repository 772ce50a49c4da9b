/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// Calendar dates (list creation day, expiry comparisons).
pub type Date = chrono::NaiveDate;

/// Wire and storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current local calendar day.
pub fn today() -> Date {
    chrono::Local::now().date_naive()
}
