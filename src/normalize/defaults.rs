use serde_json::Value;

use crate::record::BookRecord;
use crate::types::dates::candidate_instant;
use crate::types::identifiers::{random_isbn10, IsbnCode};
use crate::validate::orchestrator::present;
use crate::validate::{validate_candidate, ValidationError};

/// Materialize a user-submitted candidate into a canonical record.
///
/// The candidate is validated first and rejected, never defaulted, when a
/// required field is missing or malformed. Defaults then cover only the
/// optional surface: absent genres and description stay `None`, an absent
/// code list gets a synthesized pseudo-ISBN-10, and the primary ISBN is
/// recomputed from the resolved first code whether or not the caller sent
/// one of their own.
pub fn apply_create_defaults(candidate: &Value) -> Result<BookRecord, ValidationError> {
    validate_candidate(candidate)?;

    let title = candidate
        .get("title")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingOrInvalidTitle)?
        .to_string();

    let authors = candidate
        .get("authors")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingOrInvalidAuthors)?
        .iter()
        .map(|author| author.as_str().unwrap_or_default().to_string())
        .collect();

    let publication_date = candidate
        .get("publicationDate")
        .and_then(candidate_instant)
        .ok_or(ValidationError::MissingOrInvalidDate)?;

    let genres = present(candidate, "genres")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|genre| genre.as_str().unwrap_or_default().to_string())
                .collect()
        });

    // An empty user list would leave the record without a derivable primary;
    // it is treated like an absent one and backfilled.
    let isbn_codes = match present(candidate, "isbnCodes")
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
    {
        Some(list) => list
            .iter()
            .map(code_from_candidate)
            .collect::<Option<Vec<_>>>()
            .ok_or(ValidationError::InvalidIsbnCodes)?,
        None => vec![random_isbn10()],
    };

    // Caller-sent primaryIsbn values are never trusted.
    let primary_isbn = isbn_codes
        .first()
        .map(IsbnCode::primary_label)
        .ok_or(ValidationError::InvalidIsbnCodes)?;

    let description = present(candidate, "description")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(BookRecord {
        title,
        authors,
        publication_date,
        genres,
        isbn_codes,
        primary_isbn,
        description,
    })
}

fn code_from_candidate(code: &Value) -> Option<IsbnCode> {
    let scheme = code.get("scheme")?.as_str()?;
    let identifier = code.get("identifier")?.as_str()?;
    Some(IsbnCode::new(scheme, identifier))
}
