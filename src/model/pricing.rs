//! Pricing configuration and tiered size boundaries.

use serde::{Deserialize, Serialize};

use crate::config::{round, REFERENCE_PARCEL_AREA_CM2};

/// How the text-dependent part of the price is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterPricing {
    /// Cost per letter.
    #[default]
    Fixed,
    /// Cost per unit length of traced letter stroke.
    Material,
}

/// How the dimension-dependent shipping rate is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMode {
    /// Area-based (cm²).
    #[default]
    Flat,
    /// Volume-based (cm³); boundaries gain a length limit.
    Volumetric,
}

/// One pricing tier, bounded by maximum sign dimensions in cm.
///
/// Tiers are consulted in insertion order and matched first-fit; the last
/// tier is open-ended and applies to any sign exceeding every maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizeBoundary {
    /// Maximum sign width for this tier.
    pub max_width: f64,
    /// Maximum sign height for this tier.
    pub max_height: f64,
    /// Maximum sign length, consulted only for volumetric shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
    /// Cost per letter (fixed letter pricing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_letter: Option<f64>,
    /// Cost per unit of traced stroke length (material letter pricing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_price: Option<f64>,
    /// Base price added to every sign in this tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_start_price: Option<f64>,
    /// Shipping cost of the 100x80 cm reference parcel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_cost: Option<f64>,
    /// Shipping rate per cm², derived from the parcel cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_cm2: Option<f64>,
}

/// Derive the reference-parcel cost from a per-area rate.
pub fn derive_parcel_cost(price_per_cm2: f64) -> f64 {
    round::money(price_per_cm2 * REFERENCE_PARCEL_AREA_CM2)
}

/// Derive the per-area rate from a reference-parcel cost.
pub fn derive_price_per_cm2(parcel_cost: f64) -> f64 {
    round::rate(parcel_cost / REFERENCE_PARCEL_AREA_CM2)
}

impl SizeBoundary {
    /// Create a new boundary with the given maximum dimensions.
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
            ..Default::default()
        }
    }

    /// Set the parcel cost and rederive the per-area rate.
    ///
    /// The stored pair must stay numerically consistent; edits never touch
    /// one side alone.
    pub fn set_parcel_cost(&mut self, parcel_cost: f64) {
        self.parcel_cost = Some(round::money(parcel_cost));
        self.price_per_cm2 = Some(derive_price_per_cm2(parcel_cost));
    }

    /// Set the per-area rate and rederive the parcel cost.
    pub fn set_price_per_cm2(&mut self, price_per_cm2: f64) {
        self.price_per_cm2 = Some(round::rate(price_per_cm2));
        self.parcel_cost = Some(derive_parcel_cost(price_per_cm2));
    }

    /// Base price for this tier, zero when unset.
    pub fn start_price(&self) -> f64 {
        self.sign_start_price.unwrap_or(0.0)
    }
}

/// A merchant-authored pricing configuration.
///
/// Read-only input to the quoting pipeline; edits happen through the admin
/// persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Unique identifier fonts reference via their pricing id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Merchant-facing name (required).
    pub name: String,
    /// Merchant-facing label shown in the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Letter-cost formula selection.
    #[serde(rename = "letterPricingType")]
    pub letter_pricing: LetterPricing,
    /// Shipping-cost formula selection.
    #[serde(rename = "shippingType")]
    pub shipping: ShippingMode,
    /// Ordered pricing tiers, smallest first.
    pub size_boundaries: Vec<SizeBoundary>,
}

impl PricingConfig {
    /// Create a named configuration with no tiers yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Catalog key for this configuration. Falls back to the name for
    /// configs authored before ids were introduced.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}
