//! sign-quote-rs - Pricing and text-sizing engine for custom signage storefronts.
//!
//! This library implements the numeric core of a sign customizer: merchants
//! author tiered pricing configurations (size boundaries with letter and
//! shipping inputs), shoppers type arbitrary multi-line text, and the engine
//! estimates the sign's physical dimensions from font metrics, resolves the
//! applicable pricing tier and produces a final price.
//!
//! # Example
//!
//! ```no_run
//! use sign_quote_rs::{load_catalog_file, quote_sign, CustomerSelection, Font, FontMetrics};
//! use std::path::Path;
//!
//! let catalog = load_catalog_file(Path::new("pricing.json")).unwrap();
//! let font = Font::new("Barcelony", FontMetrics::new(Some(7.0), Some(10.0)), "neon-basic");
//! let selection = CustomerSelection::new("OPEN LATE", Some(font));
//! let quote = quote_sign(&catalog, &selection).unwrap();
//! println!("{:.2}", quote.total);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod sizing;
pub mod validation;

// Re-exports for convenience
pub use catalog::{load_catalog_file, PricingCatalog};
pub use config::{MetricDefaults, Unit};
pub use error::{ErrorCode, PricingError, Result};
pub use model::{
    AddOn, CustomerSelection, Font, FontMetrics, LetterPricing, PricingConfig, ShippingMode,
    SizeBoundary,
};
pub use pricing::{quote_price, resolve_boundary, shipping_cost, PriceQuote, QuoteStatus};
pub use sizing::{GlyphMeasurer, RatioTable, TextDimensions, TextSizer};
pub use validation::{validate_catalog, validate_config, ValidationResult};

/// Quote a shopper's sign against a pricing catalog.
///
/// This is the main high-level function that performs the full quoting
/// pipeline:
/// 1. Validate the referenced pricing config (warnings are logged, not fatal)
/// 2. Estimate the text dimensions with the built-in measurement backend
/// 3. Resolve the size boundary and apply the letter formula and add-ons
pub fn quote_sign(catalog: &PricingCatalog, selection: &CustomerSelection) -> Result<PriceQuote> {
    if let Some(font) = &selection.font {
        if let Some(config) = catalog.get(&font.pricing_id) {
            let validation = validate_config(config);
            for warning in &validation.warnings {
                tracing::warn!("{}", warning);
            }
        }
    }

    let mut sizer = TextSizer::new();
    quote_price(catalog, selection, &mut sizer)
}
