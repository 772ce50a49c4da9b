//! Placeholder "missing staples" heuristic.

/// Below this many stored items the pantry is considered under-stocked.
pub const MIN_STOCKED_ITEMS: i64 = 3;

/// Suggested when the pantry is under-stocked.
pub const STAPLES: [&str; 2] = ["Rice", "Vegetables"];

/// Staples to suggest for a pantry holding `item_count` items.
pub fn suggest_staples(item_count: i64) -> Vec<&'static str> {
    if item_count < MIN_STOCKED_ITEMS {
        STAPLES.to_vec()
    } else {
        Vec::new()
    }
}
