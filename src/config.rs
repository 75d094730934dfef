//! Configuration constants and shared numeric helpers for the pricing engine.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Reference parcel width in cm (fixed by the shipping contract).
pub const REFERENCE_PARCEL_WIDTH_CM: f64 = 100.0;

/// Reference parcel height in cm.
pub const REFERENCE_PARCEL_HEIGHT_CM: f64 = 80.0;

/// Reference parcel area in cm², the basis for parcel-cost derivation.
pub const REFERENCE_PARCEL_AREA_CM2: f64 =
    REFERENCE_PARCEL_WIDTH_CM * REFERENCE_PARCEL_HEIGHT_CM;

/// Conversion factor: cm per inch.
pub const CONV_CM_INCH: f64 = 2.54;

/// Stroke-length factor for material letter pricing. Empirical constant
/// approximating traced stroke length per character; not merchant-tunable.
pub const MATERIAL_STROKE_FACTOR: f64 = 10.0;

/// Inter-line leading as a fraction of the first line's height.
pub const LINE_SPACING_FACTOR: f64 = 0.5;

/// Reference height (units) glyph width ratios are measured at.
pub const GLYPH_REFERENCE_HEIGHT: f64 = 1000.0;

/// Default cap-height ratio for fonts without merchant-entered metrics.
pub const DEFAULT_CAP_HEIGHT_RATIO: f64 = 0.7;

/// Default x-height ratio for fonts without merchant-entered metrics.
pub const DEFAULT_X_HEIGHT_RATIO: f64 = 0.5;

use serde::{Deserialize, Serialize};

/// Unit of measurement for sign dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Centimeters,
    Inches,
}

impl Unit {
    /// Parse unit from a catalog/UI value.
    pub fn from_unit_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeters" => Some(Unit::Centimeters),
            "in" | "inch" | "inches" => Some(Unit::Inches),
            _ => None,
        }
    }

    /// Get the conversion factor from this unit to centimeters.
    pub fn to_cm_factor(&self) -> f64 {
        match self {
            Unit::Centimeters => 1.0,
            Unit::Inches => CONV_CM_INCH,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Centimeters => write!(f, "cm"),
            Unit::Inches => write!(f, "in"),
        }
    }
}

/// Fallback glyph-height ratios for fonts that ship without physical
/// measurements (Google-sourced fonts). Passed explicitly into the sizer
/// so behavior stays reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefaults {
    /// Uppercase (cap) height as a fraction of the nominal letter height.
    pub cap_height_ratio: f64,
    /// Lowercase (x) height as a fraction of the nominal letter height.
    pub x_height_ratio: f64,
}

impl Default for MetricDefaults {
    fn default() -> Self {
        Self {
            cap_height_ratio: DEFAULT_CAP_HEIGHT_RATIO,
            x_height_ratio: DEFAULT_X_HEIGHT_RATIO,
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a value does not exceed a maximum, with epsilon tolerance.
    #[inline]
    pub fn within_max(a: f64, max: f64) -> bool {
        a <= max + EPS
    }
}

/// Rounding helpers for money, rates and dimension values.
pub mod round {
    /// Round to 2 decimal places (money amounts).
    #[inline]
    pub fn money(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    /// Round to 4 decimal places (per-area rates).
    #[inline]
    pub fn rate(v: f64) -> f64 {
        (v * 10_000.0).round() / 10_000.0
    }

    /// Round to 1 decimal place (cm dimensions).
    #[inline]
    pub fn dimension(v: f64) -> f64 {
        (v * 10.0).round() / 10.0
    }
}
