//! Best-effort normalization of raw external volume items.
//!
//! This side of the pipeline is lenient by contract: it never rejects an
//! item, it substitutes placeholders and synthesized identifiers instead.
//! Strictness lives in `validate`, which gates user submissions.

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use crate::record::BookRecord;
use crate::types::dates::parse_instant;
use crate::types::identifiers::{fallback_code, FallbackCounter, IsbnCode};

/// Substituted when a source volume has no usable title.
pub const TITLE_PLACEHOLDER: &str = "Título no disponible";
/// Substituted, as a single-element list, when a source volume names no authors.
pub const AUTHOR_PLACEHOLDER: &str = "Autor no disponible";

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The upstream volumes envelope carried no `items` array, or an empty one.
    #[error("upstream response contains no volume items")]
    NoVolumeItems,
}

/// Normalize one raw volume item into a canonical record.
///
/// Total: every field that is missing or unusable gets a default. The
/// fallback counter belongs to the surrounding batch and advances once per
/// synthesized code.
pub fn normalize_external(item: &Value, counter: &mut FallbackCounter) -> BookRecord {
    let title = volume_field(item, "title")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(TITLE_PLACEHOLDER)
        .to_string();

    // An empty source author list counts as absent; canonical records must
    // name at least one author.
    let authors = volume_field(item, "authors")
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
        .map(|list| text_items(list))
        .unwrap_or_else(|| vec![AUTHOR_PLACEHOLDER.to_string()]);

    // Missing and unparseable dates are the same case: a canonical record
    // never carries an invalid instant.
    let publication_date = volume_field(item, "publishedDate")
        .and_then(Value::as_str)
        .and_then(parse_instant)
        .unwrap_or_else(Utc::now);

    let genres = volume_field(item, "categories")
        .and_then(Value::as_array)
        .map(|list| text_items(list));

    let description = volume_field(item, "description")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Resolve the code list once and derive the primary from the same first
    // element; deriving the two independently is how they drift apart.
    let isbn_codes = match source_identifiers(item) {
        Some(codes) => codes,
        None => vec![fallback_code(counter.issue())],
    };
    debug_assert!(!isbn_codes.is_empty());
    let primary_isbn = isbn_codes
        .first()
        .map(IsbnCode::primary_label)
        .unwrap_or_default();

    BookRecord {
        title,
        authors,
        publication_date,
        genres,
        isbn_codes,
        primary_isbn,
        description,
    }
}

/// Normalize a batch of raw items under one fallback-counter scope.
pub fn normalize_batch(items: &[Value]) -> Vec<BookRecord> {
    let mut counter = FallbackCounter::new();
    items
        .iter()
        .map(|item| normalize_external(item, &mut counter))
        .collect()
}

/// Normalize a whole upstream volumes envelope (`{kind, totalItems, items}`).
pub fn normalize_response(payload: &Value) -> Result<Vec<BookRecord>, NormalizeError> {
    let items = payload
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(NormalizeError::NoVolumeItems)?;
    Ok(normalize_batch(items))
}

fn volume_field<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    item.get("volumeInfo").and_then(|info| info.get(key))
}

/// The source identifier list, only when its first element is usable: both
/// `type` and `identifier` present as non-blank strings. A blank first
/// element discards the whole list in favor of synthesis.
fn source_identifiers(item: &Value) -> Option<Vec<IsbnCode>> {
    let list = volume_field(item, "industryIdentifiers")?.as_array()?;
    let first = list.first()?;
    if !usable_code_text(first.get("type")) || !usable_code_text(first.get("identifier")) {
        return None;
    }
    Some(
        list.iter()
            .map(|code| {
                IsbnCode::new(
                    text_or_empty(code.get("type")),
                    text_or_empty(code.get("identifier")),
                )
            })
            .collect(),
    )
}

fn usable_code_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

fn text_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn text_items(list: &[Value]) -> Vec<String> {
    list.iter()
        .map(|value| value.as_str().unwrap_or_default().to_string())
        .collect()
}
