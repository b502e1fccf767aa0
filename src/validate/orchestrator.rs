use serde_json::Value;
use thiserror::Error;

use super::fields;

/// First-failure tag for a rejected candidate.
///
/// Callers map each variant to a user-facing message and reject the request
/// outright; there is no partial acceptance. `UnknownField` is the fallback
/// tag for failure sources outside this enum's knowledge, e.g. reasons read
/// back from an older persisted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or invalid title")]
    MissingOrInvalidTitle,
    #[error("missing or invalid authors")]
    MissingOrInvalidAuthors,
    #[error("missing or invalid publication date")]
    MissingOrInvalidDate,
    #[error("invalid genres")]
    InvalidGenres,
    #[error("invalid ISBN codes")]
    InvalidIsbnCodes,
    #[error("invalid description")]
    InvalidDescription,
    #[error("unknown validation failure")]
    UnknownField,
}

/// Validate a candidate record, short-circuiting at the first failing field.
///
/// Required fields are checked unconditionally, in order: title, authors,
/// publication date. Optional fields are checked only when present. Absent
/// means the key is missing or its value is `null`; empty strings and empty
/// sequences count as present and are judged by their validators.
pub fn validate_candidate(candidate: &Value) -> Result<(), ValidationError> {
    if !fields::title_is_valid(candidate.get("title")) {
        return Err(ValidationError::MissingOrInvalidTitle);
    }
    if !fields::authors_is_valid(candidate.get("authors")) {
        return Err(ValidationError::MissingOrInvalidAuthors);
    }
    if !fields::publication_date_is_valid(candidate.get("publicationDate")) {
        return Err(ValidationError::MissingOrInvalidDate);
    }

    if let Some(genres) = present(candidate, "genres") {
        if !fields::genres_is_valid(genres) {
            return Err(ValidationError::InvalidGenres);
        }
    }
    if let Some(codes) = present(candidate, "isbnCodes") {
        if !fields::isbn_codes_is_valid(codes) {
            return Err(ValidationError::InvalidIsbnCodes);
        }
    }
    if let Some(description) = present(candidate, "description") {
        if !fields::description_is_valid(description) {
            return Err(ValidationError::InvalidDescription);
        }
    }

    Ok(())
}

/// A field is absent iff the key is missing or the value is `null`.
pub(crate) fn present<'a>(candidate: &'a Value, key: &str) -> Option<&'a Value> {
    candidate.get(key).filter(|value| !value.is_null())
}
