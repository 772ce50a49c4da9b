//! "You forgot X" reminders.
//!
//! Compares the names extracted from today's prompt against the names
//! recorded over the previous week and renders the difference as a single
//! English sentence.

use std::collections::BTreeSet;

use chrono::Days;

use crate::types::Date;

/// Length of the look-back window in days.
pub const RECENT_WINDOW_DAYS: u64 = 7;

/// The look-back window for `today`: the 7 days ending yesterday, inclusive.
///
/// Today itself is never part of the window.
pub fn recent_window(today: Date) -> (Date, Date) {
    let start = today - Days::new(RECENT_WINDOW_DAYS);
    let end = today - Days::new(1);
    (start, end)
}

/// Names bought recently but absent today, case-folded, unique and sorted.
///
/// Blank names are ignored on both sides.
pub fn missing_names<R, T>(recent: R, today: T) -> Vec<String>
where
    R: IntoIterator,
    R::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let today: BTreeSet<String> = today
        .into_iter()
        .map(|n| fold(n.as_ref()))
        .filter(|n| !n.is_empty())
        .collect();

    recent
        .into_iter()
        .map(|n| fold(n.as_ref()))
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|n| !today.contains(n))
        .collect()
}

/// Join names as an English list: `a`, `a and b`, `a, b, and c`.
pub fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Reminder sentence for the given missing names, or `None` when nothing
/// is missing.
pub fn reminder(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    Some(format!(
        "You bought {} in the past week but didn't add them today. Don't forget!",
        join_names(missing)
    ))
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
