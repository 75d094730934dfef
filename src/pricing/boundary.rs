//! Size boundary resolution against a pricing configuration.

use crate::config::{float_cmp, round};
use crate::error::{PricingError, Result};
use crate::model::{PricingConfig, ShippingMode, SizeBoundary};

/// Resolve the pricing tier applicable to a sign of the given dimensions.
///
/// Boundaries are consulted in insertion order and matched first-fit, not
/// best-fit. A sign exceeding every maximum falls into the last tier,
/// which continues to infinity. An empty boundary list is a merchant
/// configuration error.
pub fn resolve_boundary<'a>(
    config: &'a PricingConfig,
    width_cm: f64,
    height_cm: f64,
    length_cm: Option<f64>,
) -> Result<&'a SizeBoundary> {
    let Some(last) = config.size_boundaries.last() else {
        return Err(PricingError::NoSizeBoundaries {
            config: config.name.clone(),
        });
    };

    for boundary in &config.size_boundaries {
        if boundary_fits(config.shipping, boundary, width_cm, height_cm, length_cm) {
            return Ok(boundary);
        }
    }

    Ok(last)
}

/// Check whether a sign fits within a boundary's maxima.
fn boundary_fits(
    shipping: ShippingMode,
    boundary: &SizeBoundary,
    width_cm: f64,
    height_cm: f64,
    length_cm: Option<f64>,
) -> bool {
    if !float_cmp::within_max(width_cm, boundary.max_width)
        || !float_cmp::within_max(height_cm, boundary.max_height)
    {
        return false;
    }

    if shipping == ShippingMode::Volumetric {
        if let (Some(length), Some(max_length)) = (length_cm, boundary.max_length) {
            return float_cmp::within_max(length, max_length);
        }
    }

    true
}

/// Dimension-driven shipping cost for a resolved tier.
///
/// Flat shipping applies the per-area rate to the sign's face area;
/// volumetric shipping applies it to the volume, degrading to the area
/// computation when no length measurement is available. This cost is not
/// folded into the quoted total; the storefront decides whether and how
/// to surface it.
pub fn shipping_cost(
    config: &PricingConfig,
    boundary: &SizeBoundary,
    width_cm: f64,
    height_cm: f64,
    length_cm: Option<f64>,
) -> f64 {
    let rate = boundary.price_per_cm2.unwrap_or(0.0);
    let area = width_cm * height_cm;
    let measure = match (config.shipping, length_cm) {
        (ShippingMode::Volumetric, Some(length)) => area * length,
        _ => area,
    };
    round::money(rate * measure)
}
