pub mod fields;
pub mod orchestrator;

pub use orchestrator::{validate_candidate, ValidationError};
