//! Validation logic for pricing configurations.

use crate::catalog::PricingCatalog;
use crate::error::{PricingError, Result};
use crate::model::{derive_parcel_cost, LetterPricing, PricingConfig, SizeBoundary};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate every config in a catalog.
pub fn validate_catalog(catalog: &PricingCatalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if catalog.is_empty() {
        result.add_warning("Catalog contains no pricing configs");
    }

    for config in catalog.iter() {
        result.merge(validate_config(config));
    }

    result
}

/// Validate a single pricing configuration.
pub fn validate_config(config: &PricingConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = config.key();

    if config.name.trim().is_empty() {
        result.add_error(format!("Config '{}': name is required", label));
    }

    // Not a data-model error, but quoting fails without a tier
    if config.size_boundaries.is_empty() {
        result.add_warning(format!(
            "Config '{}': no size boundaries, price resolution will fail",
            label
        ));
    }

    for (idx, boundary) in config.size_boundaries.iter().enumerate() {
        validate_boundary(&mut result, config, boundary, label, idx + 1);
    }

    result
}

/// Validate a single size boundary.
fn validate_boundary(
    result: &mut ValidationResult,
    config: &PricingConfig,
    boundary: &SizeBoundary,
    label: &str,
    boundary_num: usize,
) {
    let mut check_non_negative = |field: &str, value: Option<f64>| {
        if let Some(v) = value {
            if v < 0.0 {
                result.add_error(format!(
                    "Config '{}', boundary {}: {} must be non-negative, got {}",
                    label, boundary_num, field, v
                ));
            }
        }
    };

    check_non_negative("maxWidth", Some(boundary.max_width));
    check_non_negative("maxHeight", Some(boundary.max_height));
    check_non_negative("maxLength", boundary.max_length);
    check_non_negative("pricePerLetter", boundary.price_per_letter);
    check_non_negative("materialPrice", boundary.material_price);
    check_non_negative("signStartPrice", boundary.sign_start_price);
    check_non_negative("parcelCost", boundary.parcel_cost);
    check_non_negative("pricePerCm2", boundary.price_per_cm2);

    // Missing letter inputs quote as zero; worth flagging, not fatal
    let missing_letter_input = match config.letter_pricing {
        LetterPricing::Fixed => boundary.price_per_letter.is_none(),
        LetterPricing::Material => boundary.material_price.is_none(),
    };
    if missing_letter_input {
        result.add_warning(format!(
            "Config '{}', boundary {}: no letter price for {:?} pricing",
            label, boundary_num, config.letter_pricing
        ));
    }

    // The stored pair must agree with the reference-parcel derivation
    if let (Some(parcel_cost), Some(rate)) = (boundary.parcel_cost, boundary.price_per_cm2) {
        if (derive_parcel_cost(rate) - parcel_cost).abs() > 0.01 {
            result.add_warning(format!(
                "Config '{}', boundary {}: parcelCost {} and pricePerCm2 {} are inconsistent",
                label, boundary_num, parcel_cost, rate
            ));
        }
    }
}

/// Quick validation check for the command-line --validate flag.
pub fn quick_validate(catalog: &PricingCatalog) -> Result<()> {
    let result = validate_catalog(catalog);

    if !result.passed {
        let field = result.errors.join("; ");
        return Err(PricingError::InvalidValue {
            field,
            expected: "valid pricing configuration".to_string(),
            value: String::new(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn basic_config() -> PricingConfig {
        let mut config = PricingConfig::new("p1", "Basic");
        let mut boundary = SizeBoundary::new(100.0, 50.0);
        boundary.price_per_letter = Some(2.0);
        config.size_boundaries.push(boundary);
        config
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_error("This is an error");
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_config tests ====================

    #[test]
    fn test_valid_config_passes() {
        let result = validate_config(&basic_config());
        assert!(result.passed);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_name_is_error() {
        let mut config = basic_config();
        config.name = "  ".to_string();
        let result = validate_config(&config);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("name is required")));
    }

    #[test]
    fn test_no_boundaries_is_warning() {
        let mut config = basic_config();
        config.size_boundaries.clear();
        let result = validate_config(&config);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("no size boundaries")));
    }

    #[test]
    fn test_negative_field_is_error() {
        let mut config = basic_config();
        config.size_boundaries[0].sign_start_price = Some(-5.0);
        let result = validate_config(&config);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("signStartPrice") && e.contains("non-negative")));
    }

    #[test]
    fn test_missing_letter_input_is_warning() {
        let mut config = basic_config();
        config.letter_pricing = LetterPricing::Material;
        let result = validate_config(&config);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("no letter price")));
    }

    #[test]
    fn test_inconsistent_shipping_pair_is_warning() {
        let mut config = basic_config();
        config.size_boundaries[0].parcel_cost = Some(80.0);
        config.size_boundaries[0].price_per_cm2 = Some(0.5);
        let result = validate_config(&config);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("inconsistent")));
    }

    #[test]
    fn test_consistent_shipping_pair_no_warning() {
        let mut config = basic_config();
        config.size_boundaries[0].set_parcel_cost(80.0);
        let result = validate_config(&config);
        assert!(result.warnings.is_empty());
    }

    // ==================== catalog / quick validate ====================

    #[test]
    fn test_validate_catalog_empty_warning() {
        let result = validate_catalog(&PricingCatalog::new());
        assert!(result.passed);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_quick_validate_success() {
        let catalog = PricingCatalog::from_configs([basic_config()]);
        assert!(quick_validate(&catalog).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let mut config = basic_config();
        config.size_boundaries[0].max_width = -1.0;
        let catalog = PricingCatalog::from_configs([config]);
        assert!(quick_validate(&catalog).is_err());
    }
}
