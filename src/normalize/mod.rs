pub mod defaults;
pub mod external;

pub use defaults::apply_create_defaults;
pub use external::{normalize_batch, normalize_external, normalize_response, NormalizeError};
