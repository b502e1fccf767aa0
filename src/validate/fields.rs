//! Per-field predicates over raw candidate values.
//!
//! Each predicate judges one field in isolation and handles the absent case
//! explicitly; sequencing and presence-gating live in `orchestrator`.

use serde_json::Value;

use crate::types::dates::candidate_instant;

/// Required: text, non-blank after trim.
pub fn title_is_valid(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// Required: a non-empty sequence.
pub fn authors_is_valid(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(list)) if !list.is_empty())
}

/// Required: a value resolvable to a valid instant, either epoch
/// milliseconds or a parseable date string. Strict, unlike the external
/// normalizer's now() substitution.
pub fn publication_date_is_valid(value: Option<&Value>) -> bool {
    value.and_then(candidate_instant).is_some()
}

/// Optional: when present, must be a non-empty sequence.
pub fn genres_is_valid(value: &Value) -> bool {
    matches!(value, Value::Array(list) if !list.is_empty())
}

/// Optional: when present, every element needs string `scheme` and
/// `identifier`, both non-blank after trim.
pub fn isbn_codes_is_valid(value: &Value) -> bool {
    let Value::Array(list) = value else {
        return false;
    };
    list.iter()
        .all(|code| non_blank_text(code.get("scheme")) && non_blank_text(code.get("identifier")))
}

/// Optional: when present, must be non-blank text.
pub fn description_is_valid(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.trim().is_empty())
}

fn non_blank_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}
