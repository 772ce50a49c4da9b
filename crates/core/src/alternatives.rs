//! Healthier substitutes for common groceries.

/// Reply when no substitute is known.
pub const NO_SUGGESTION: &str = "No suggestion";

/// Less healthy item -> healthier substitute. Lookup is exact-case.
const HEALTHIER: &[(&str, &str)] = &[
    ("White Bread", "Brown Bread"),
    ("Sugar", "Honey"),
    ("Milk", "Low Fat Milk"),
    ("Chips", "Roasted Peanuts"),
];

/// Healthier substitute for `name`, or [`NO_SUGGESTION`].
pub fn healthier_alternative(name: &str) -> &'static str {
    HEALTHIER
        .iter()
        .find(|(item, _)| *item == name)
        .map(|(_, alternative)| *alternative)
        .unwrap_or(NO_SUGGESTION)
}
