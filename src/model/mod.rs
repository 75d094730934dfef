//! Data model for pricing configurations, fonts and customer selections.

pub mod font;
pub mod pricing;
pub mod selection;

pub use font::{Font, FontMetrics};
pub use pricing::{
    derive_parcel_cost, derive_price_per_cm2, LetterPricing, PricingConfig, ShippingMode,
    SizeBoundary,
};
pub use selection::{AddOn, CustomerSelection};
