use rand::Rng;
use serde::{Deserialize, Serialize};

/// One ISBN-like code pair as carried by a canonical record.
///
/// External payloads spell the scheme key `type`; the external reader in
/// `normalize` owns that mapping, so everything past the boundary speaks
/// `scheme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnCode {
    pub scheme: String,
    pub identifier: String,
}

impl IsbnCode {
    pub fn new(scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            identifier: identifier.into(),
        }
    }

    /// Render the primary-ISBN label for a record whose first code this is.
    ///
    /// This is the only derivation of a primary ISBN in the crate; the
    /// storage layer's uniqueness constraint hangs off its determinism.
    pub fn primary_label(&self) -> String {
        format!("{}-{}", self.scheme, self.identifier)
    }
}

/// Sequence for fallback identifiers.
///
/// Scoped to one normalization batch and threaded by `&mut`, never held in
/// process-global state: concurrent batches each start at 1 and cannot
/// observe each other's values.
#[derive(Debug)]
pub struct FallbackCounter {
    next: u64,
}

impl FallbackCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the current sequence value and advance by one.
    pub fn issue(&mut self) -> u64 {
        let seq = self.next;
        self.next += 1;
        seq
    }
}

impl Default for FallbackCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder code for a source volume that carries no usable identifiers.
///
/// The identifier text is human-readable and unique only within the issuing
/// batch. Not a real ISBN.
pub fn fallback_code(seq: u64) -> IsbnCode {
    IsbnCode::new("ISBN", format!("No disponible nº{seq}"))
}

/// Pseudo-ISBN-10 for user submissions that omit codes entirely: a uniform
/// value in [0, 10^10) rendered as a fixed-width-10 decimal string.
///
/// No uniqueness guarantee; collisions are caught by the storage layer's
/// unique index on the primary ISBN.
pub fn random_isbn10() -> IsbnCode {
    let n = rand::thread_rng().gen_range(0..10_000_000_000_u64);
    IsbnCode::new("ISBN-10", format!("{n:010}"))
}
