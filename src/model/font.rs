//! Font description consumed at quote time.

use serde::{Deserialize, Serialize};

use crate::config::MetricDefaults;

/// Physical height metrics for a font, merchant-entered in cm.
///
/// Both fields are baseline measurements of the font's rendered glyphs;
/// either may be absent for Google-sourced fonts, in which case the
/// missing side is derived through [`MetricDefaults`] ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontMetrics {
    /// Minimum physical height of the smallest (lowercase/x-height) glyphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_smallest: Option<f64>,
    /// Minimum physical height of uppercase glyphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_uppercase: Option<f64>,
}

impl FontMetrics {
    /// Create metrics from explicit measurements.
    pub fn new(min_height_smallest: Option<f64>, min_height_uppercase: Option<f64>) -> Self {
        Self {
            min_height_smallest,
            min_height_uppercase,
        }
    }

    /// Height of a line carrying uppercase letters.
    ///
    /// When the cap measurement is absent, scales the x-height measurement
    /// up through the default ratios.
    pub fn uppercase_height(&self, defaults: &MetricDefaults) -> Option<f64> {
        self.min_height_uppercase.or_else(|| {
            self.min_height_smallest
                .map(|h| h / defaults.x_height_ratio * defaults.cap_height_ratio)
        })
    }

    /// Height of a line with no uppercase letters.
    ///
    /// Falls back to a fraction of the cap measurement when the x-height
    /// measurement is absent.
    pub fn lowercase_height(&self, defaults: &MetricDefaults) -> Option<f64> {
        self.min_height_smallest.or_else(|| {
            self.min_height_uppercase
                .map(|h| h * defaults.cap_height_ratio)
        })
    }

    /// Whether any measurement is available to size text with.
    pub fn is_sizable(&self) -> bool {
        self.min_height_smallest.is_some() || self.min_height_uppercase.is_some()
    }
}

/// A storefront font with its pricing linkage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Font {
    /// CSS-style family name, the key glyph measurements are cached under.
    pub font_family: String,
    /// Physical height metrics.
    #[serde(flatten)]
    pub metrics: FontMetrics,
    /// Id of the pricing config this font quotes against.
    pub pricing_id: String,
}

impl Font {
    /// Create a font linked to a pricing config.
    pub fn new(
        font_family: impl Into<String>,
        metrics: FontMetrics,
        pricing_id: impl Into<String>,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            metrics,
            pricing_id: pricing_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> MetricDefaults {
        MetricDefaults::default()
    }

    #[test]
    fn test_uppercase_height_explicit() {
        let metrics = FontMetrics::new(Some(7.0), Some(10.0));
        assert_eq!(metrics.uppercase_height(&defaults()), Some(10.0));
    }

    #[test]
    fn test_uppercase_height_derived_from_x_height() {
        // 5 cm x-height scaled through 0.5 -> 0.7 gives a 7 cm cap height
        let metrics = FontMetrics::new(Some(5.0), None);
        let h = metrics.uppercase_height(&defaults()).unwrap();
        assert!((h - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_lowercase_height_fallback() {
        let metrics = FontMetrics::new(None, Some(10.0));
        let h = metrics.lowercase_height(&defaults()).unwrap();
        assert!((h - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmeasured_font_is_not_sizable() {
        let metrics = FontMetrics::default();
        assert!(!metrics.is_sizable());
        assert_eq!(metrics.uppercase_height(&defaults()), None);
        assert_eq!(metrics.lowercase_height(&defaults()), None);
    }

    #[test]
    fn test_font_deserializes_flat_metrics() {
        let json = r#"{
            "fontFamily": "Barcelony",
            "minHeightUppercase": 10,
            "minHeightSmallest": 7,
            "pricingId": "neon-basic"
        }"#;
        let font: Font = serde_json::from_str(json).unwrap();
        assert_eq!(font.font_family, "Barcelony");
        assert_eq!(font.metrics.min_height_uppercase, Some(10.0));
        assert_eq!(font.pricing_id, "neon-basic");
    }
}
