//! Record normalization and validation core for bibliographic catalogs.
//!
//! `catalog-core` reconciles heterogeneous, partially-missing external volume
//! data into a strict canonical schema: field defaulting, fallback identifier
//! synthesis, candidate validation, and deterministic primary-ISBN
//! derivation. The pipeline performs no I/O: raw payloads come in, canonical
//! records or field-level rejections come out.
//!
//! See <https://github.com/cataloghq/catalog-engine> for the full platform.

pub mod normalize;
pub mod record;
pub mod types;
pub mod validate;
