use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::IsbnCode;

/// The canonical, persisted catalog entry.
///
/// Construction goes through the `normalize` module, which enforces the
/// schema invariants: `isbn_codes` is never empty, `publication_date` is
/// always a materialized valid instant, and `primary_isbn` is derived from
/// `isbn_codes[0]` rather than set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub publication_date: DateTime<Utc>,
    pub genres: Option<Vec<String>>,
    pub isbn_codes: Vec<IsbnCode>,
    pub primary_isbn: String,
    pub description: Option<String>,
}

impl BookRecord {
    /// Re-derive `primary_isbn` from the current first code.
    ///
    /// Update flows that touch `isbn_codes` must call this before handing
    /// the record back to storage; the two fields are not allowed to
    /// disagree.
    pub fn recompute_primary_isbn(&mut self) {
        if let Some(first) = self.isbn_codes.first() {
            self.primary_isbn = first.primary_label();
        }
    }
}
