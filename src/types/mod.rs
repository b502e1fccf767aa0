pub mod dates;
pub mod identifiers;

pub use identifiers::{fallback_code, random_isbn10, FallbackCounter, IsbnCode};
