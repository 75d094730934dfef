//! Error types for sign pricing and sizing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes surfaced to the merchant admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catalog file not found (-1)
    FileNotFound = -1,
    /// Empty catalog file (-2)
    EmptyFile = -2,
    /// Malformed catalog JSON (-3)
    InvalidCatalog = -3,
    /// Pricing config has no size boundaries (E100)
    NoSizeBoundaries = 100,
    /// Referenced pricing config not found (E101)
    PricingNotFound = 101,
    /// Invalid configuration field value (E102)
    InvalidValue = 102,
}

/// Main error type for the pricing engine.
///
/// Everything here requires merchant action; per-customer soft states
/// (incomplete selection, unmeasurable glyph) never surface as errors.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty catalog file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Pricing config '{config}' has no size boundaries")]
    NoSizeBoundaries { config: String },

    #[error("Pricing config not found: {pricing_id}")]
    PricingNotFound { pricing_id: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PricingError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PricingError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PricingError::NoSizeBoundaries { .. } => ErrorCode::NoSizeBoundaries,
            PricingError::PricingNotFound { .. } => ErrorCode::PricingNotFound,
            PricingError::InvalidValue { .. } => ErrorCode::InvalidValue,
            PricingError::Json(_) => ErrorCode::InvalidCatalog,
            PricingError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PricingError::NoSizeBoundaries {
            config: "neon-basic".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::NoSizeBoundaries);
        assert_eq!(err.code_value(), 100);
    }

    #[test]
    fn test_error_display() {
        let err = PricingError::PricingNotFound {
            pricing_id: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Pricing config not found: missing");
    }
}
