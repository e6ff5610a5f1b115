//! Skill string normalization
//!
//! Turns free-form skill text ("Python, Machine Learning ,SQL") into the
//! canonical token sequence every other stage works with.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static SKILL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("valid regex"));

/// Split a raw skill string into trimmed, lowercased, non-empty tokens.
///
/// Order and duplicates from the input are preserved.
#[must_use]
pub fn normalize(raw: &str) -> Vec<String> {
    SKILL_SEPARATOR
        .split(raw)
        .filter_map(canonical_token)
        .collect()
}

/// Normalize tokens that were already split by the caller.
#[must_use]
pub fn normalize_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| canonical_token(token.as_ref()))
        .collect()
}

/// Normalize an arbitrary JSON value.
///
/// Strings are split as skill text, arrays are treated as pre-split token
/// lists, `null` is empty and any other scalar is coerced to its string form.
#[must_use]
pub fn normalize_value(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) => normalize(text),
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(text) => normalize(text),
                other => normalize_value(other),
            })
            .collect(),
        other => normalize(&other.to_string()),
    }
}

fn canonical_token(piece: &str) -> Option<String> {
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
