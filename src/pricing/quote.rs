//! Price quoting: composes sizing, boundary resolution and add-ons.

use serde::Serialize;
use tracing::warn;

use crate::catalog::PricingCatalog;
use crate::config::{round, MATERIAL_STROKE_FACTOR};
use crate::error::Result;
use crate::model::{CustomerSelection, LetterPricing, SizeBoundary};
use crate::sizing::{GlyphMeasurer, TextDimensions, TextSizer};

use super::boundary::resolve_boundary;

/// Outcome category of a quote attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteStatus {
    /// Every input resolved; the total is a real price.
    Priced,
    /// The shopper has not finished selecting: no font, empty text, or a
    /// font that cannot be sized yet. An expected state, not an error.
    Incomplete,
    /// The font references a pricing config the catalog cannot resolve.
    /// Reported for merchant visibility; the storefront shows 0.
    MissingPricing,
}

/// Result of a price calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Final amount, rounded to 2 decimals. 0 unless `Priced`.
    pub total: f64,
    /// Outcome category.
    pub status: QuoteStatus,
    /// Estimated sign dimensions (zero-sized unless the text was sized).
    pub dimensions: TextDimensions,
}

impl PriceQuote {
    fn incomplete() -> Self {
        Self {
            total: 0.0,
            status: QuoteStatus::Incomplete,
            dimensions: TextDimensions::default(),
        }
    }

    fn missing_pricing() -> Self {
        Self {
            total: 0.0,
            status: QuoteStatus::MissingPricing,
            dimensions: TextDimensions::default(),
        }
    }
}

/// Compute the price for a shopper's current selection.
///
/// Soft failures (incomplete selection, unresolvable pricing id) degrade
/// to a zero total with the matching status so the storefront never hard
/// fails mid-customization. Only structurally broken configuration, such
/// as a config with no size boundaries, surfaces as an error for the
/// merchant to fix.
pub fn quote_price<M: GlyphMeasurer>(
    catalog: &PricingCatalog,
    selection: &CustomerSelection,
    sizer: &mut TextSizer<M>,
) -> Result<PriceQuote> {
    let Some(font) = &selection.font else {
        return Ok(PriceQuote::incomplete());
    };
    if selection.text.trim().is_empty() {
        return Ok(PriceQuote::incomplete());
    }

    let Some(config) = catalog.get(&font.pricing_id) else {
        warn!(
            "font '{}' references unknown pricing config '{}'",
            font.font_family, font.pricing_id
        );
        return Ok(PriceQuote::missing_pricing());
    };

    let dimensions = sizer.calculate_dimensions(&selection.text, font, 1.0);
    if dimensions.is_zero() {
        return Ok(PriceQuote::incomplete());
    }

    let boundary = resolve_boundary(config, dimensions.width_cm, dimensions.height_cm, None)?;

    let letters = letter_cost(config.letter_pricing, boundary, selection.character_count());
    let total = round::money(letters + selection.modifier_total());

    Ok(PriceQuote {
        total,
        status: QuoteStatus::Priced,
        dimensions,
    })
}

/// Text-dependent portion of the price for a resolved tier.
///
/// `character_count` is the literal text length, spaces included.
pub fn letter_cost(
    pricing: LetterPricing,
    boundary: &SizeBoundary,
    character_count: usize,
) -> f64 {
    let count = character_count as f64;
    match pricing {
        LetterPricing::Fixed => {
            boundary.price_per_letter.unwrap_or(0.0) * count + boundary.start_price()
        }
        LetterPricing::Material => {
            boundary.material_price.unwrap_or(0.0) * count * MATERIAL_STROKE_FACTOR
                + boundary.start_price()
        }
    }
}
