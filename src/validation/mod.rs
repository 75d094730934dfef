//! Merchant-facing configuration validation.

pub mod validate;

pub use validate::{quick_validate, validate_catalog, validate_config, ValidationResult};
