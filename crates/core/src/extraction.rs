//! Parsing of language-model extraction output.
//!
//! The model is asked for a bare JSON array of `{item, qty, expires}`
//! objects, but its output is untrusted text: it may wrap the array in
//! prose or markdown fences, answer `none`, or produce broken JSON. This
//! module turns that text into an [`Extraction`] without ever panicking.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// Greedy bracket span: first `[` to last `]`, across newlines.
static ARRAY_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

/// Name stored when the model omits the item name.
pub const DEFAULT_NAME: &str = "Unknown";

/// Quantity stored when the model omits the quantity or leaves it blank.
pub const DEFAULT_QTY: &str = "1";

/// Outcome of parsing one raw model response.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// A JSON array was found and decoded. May still be zero-length.
    Success(Vec<ParsedItem>),
    /// The model reported nothing, or no array could be located.
    Empty,
    /// An array was located but is not valid item JSON.
    Malformed { raw: String, reason: String },
}

/// One element of the model's JSON array, as the model produced it.
///
/// Every key is optional and every value is kept as raw JSON, because the
/// model is free to send `"qty": 2` just as well as `"qty": "2"`. Defaults
/// are applied later by [`ParsedItem::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedItem {
    pub item: Option<Value>,
    pub qty: Option<Value>,
    pub expires: Option<Value>,
}

/// A parsed item with defaults applied, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub name: String,
    pub qty: String,
    pub expiry: String,
}

impl ParsedItem {
    /// Apply storage defaults.
    ///
    /// - missing or null name becomes [`DEFAULT_NAME`]
    /// - missing, null or blank quantity becomes [`DEFAULT_QTY`]
    /// - missing or null expiry becomes the empty string; anything else is
    ///   kept verbatim, valid date or not
    pub fn resolve(&self) -> ResolvedItem {
        let name = self
            .item
            .as_ref()
            .and_then(value_text)
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let qty = self
            .qty
            .as_ref()
            .and_then(value_text)
            .filter(|q| !q.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_QTY.to_string());

        let expiry = self
            .expires
            .as_ref()
            .and_then(value_text)
            .unwrap_or_default();

        ResolvedItem { name, qty, expiry }
    }
}

/// Accept a shopping prompt only if it has non-whitespace content.
///
/// Returns the prompt unmodified; only the check looks at trimmed text.
pub fn validate_prompt(prompt: Option<&str>) -> Result<&str, CoreError> {
    match prompt {
        Some(p) if !p.trim().is_empty() => Ok(p),
        _ => Err(CoreError::Validation(
            "Prompt is required in the request body".to_string(),
        )),
    }
}

/// Parse the raw text returned by the extraction model.
///
/// 1. Blank text, `[]` or `none` (any case) is [`Extraction::Empty`].
/// 2. Text that is already bracketed is decoded directly.
/// 3. Otherwise the first greedy `[...]` span is decoded; no span is
///    [`Extraction::Empty`].
/// 4. Undecodable JSON is [`Extraction::Malformed`].
pub fn parse_extraction(raw: &str) -> Extraction {
    let text = raw.trim();

    if text.is_empty() || text == "[]" || text.eq_ignore_ascii_case("none") {
        return Extraction::Empty;
    }

    let candidate = if text.starts_with('[') && text.ends_with(']') {
        text
    } else {
        match ARRAY_SPAN_RE.find(text) {
            Some(m) => m.as_str(),
            None => return Extraction::Empty,
        }
    };

    match serde_json::from_str::<Vec<ParsedItem>>(candidate) {
        Ok(items) => Extraction::Success(items),
        Err(e) => Extraction::Malformed {
            raw: raw.to_string(),
            reason: e.to_string(),
        },
    }
}

/// Render a scalar JSON value as stored text. Null yields `None`.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
