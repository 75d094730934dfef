//! Glyph width measurement backend.

/// Measures the width-to-height ratio of a single glyph rendered bold at
/// the reference height (see [`crate::config::GLYPH_REFERENCE_HEIGHT`]).
///
/// Implementations may wrap a rasterizer or a precomputed sample table.
/// An unmeasurable glyph returns `None` and contributes zero width to the
/// aggregate; it never aborts a calculation.
pub trait GlyphMeasurer {
    /// Width-to-height ratio of `ch` in `font_family`, or `None` when the
    /// glyph cannot be measured.
    fn measure_ratio(&self, ch: char, font_family: &str) -> Option<f64>;
}

/// Deterministic character-class ratio table.
///
/// Stands in for a rasterizing backend when none is available (headless
/// quoting, tests). Ratios approximate a bold sans rendering measured at
/// the reference height; per-family differences are below the rounding
/// applied downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioTable;

impl GlyphMeasurer for RatioTable {
    fn measure_ratio(&self, ch: char, _font_family: &str) -> Option<f64> {
        let ratio = match ch {
            'i' | 'j' | 'l' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 0.35,
            'f' | 't' | 'r' | 'I' | 'J' | '1' | '(' | ')' | '[' | ']' => 0.45,
            'm' | 'w' => 0.85,
            'M' | 'W' => 0.95,
            ' ' => 0.33,
            '-' | '_' => 0.5,
            '&' | '@' | '%' => 0.9,
            c if c.is_ascii_uppercase() => 0.72,
            c if c.is_ascii_digit() => 0.56,
            c if c.is_ascii_lowercase() => 0.52,
            c if c.is_control() => return None,
            c if c.is_alphabetic() => 0.6,
            _ => 0.55,
        };
        Some(ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_glyphs_thinner_than_wide() {
        let table = RatioTable;
        let narrow = table.measure_ratio('i', "sans-serif").unwrap();
        let wide = table.measure_ratio('W', "sans-serif").unwrap();
        assert!(narrow < wide);
    }

    #[test]
    fn test_space_has_width() {
        let table = RatioTable;
        assert!(table.measure_ratio(' ', "sans-serif").unwrap() > 0.0);
    }

    #[test]
    fn test_control_chars_unmeasurable() {
        let table = RatioTable;
        assert_eq!(table.measure_ratio('\t', "sans-serif"), None);
    }

    #[test]
    fn test_non_ascii_letters_measured() {
        let table = RatioTable;
        assert!(table.measure_ratio('é', "sans-serif").is_some());
    }
}
