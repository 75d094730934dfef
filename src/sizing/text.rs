//! Multi-line text dimension estimation.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{round, MetricDefaults, CONV_CM_INCH, LINE_SPACING_FACTOR};
use crate::model::Font;

use super::measure::{GlyphMeasurer, RatioTable};

/// Estimated physical dimensions of a custom text sign.
///
/// Centimeters drive boundary matching; inches are the coarse merchant
/// presentation, rounded up to whole inches at the conversion edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDimensions {
    /// Widest line width, rounded to 1 decimal.
    pub width_cm: f64,
    /// Stacked line heights plus leading, rounded to 1 decimal.
    pub height_cm: f64,
    /// Width in whole inches, rounded up.
    pub width_in: f64,
    /// Height in whole inches, rounded up.
    pub height_in: f64,
    /// Number of non-blank lines.
    pub number_of_lines: usize,
}

impl TextDimensions {
    /// Whether this is the zero result (empty or unsizable text). Callers
    /// must treat it as "no price computable yet", not a zero-cost sign.
    pub fn is_zero(&self) -> bool {
        self.number_of_lines == 0
    }
}

/// Estimates sign dimensions from font metrics without rendering.
///
/// Glyph ratios are deterministic per (char, family) and cached for the
/// lifetime of the sizer. A fresh sizer per quote is sufficient and keeps
/// ratios from going stale when a font file changes.
pub struct TextSizer<M = RatioTable> {
    backend: M,
    defaults: MetricDefaults,
    cache: HashMap<(char, String), Option<f64>>,
}

impl TextSizer<RatioTable> {
    /// Sizer backed by the built-in ratio table and default metric ratios.
    pub fn new() -> Self {
        Self::with_backend(RatioTable, MetricDefaults::default())
    }
}

impl Default for TextSizer<RatioTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: GlyphMeasurer> TextSizer<M> {
    /// Sizer with an explicit measurement backend and metric defaults.
    pub fn with_backend(backend: M, defaults: MetricDefaults) -> Self {
        Self {
            backend,
            defaults,
            cache: HashMap::new(),
        }
    }

    /// Cached glyph ratio lookup. Failed measurements are cached too so
    /// they are not retried within one calculation.
    fn glyph_ratio(&mut self, ch: char, font_family: &str) -> f64 {
        let key = (ch, font_family.to_string());
        if let Some(cached) = self.cache.get(&key) {
            return cached.unwrap_or(0.0);
        }
        let measured = self.backend.measure_ratio(ch, font_family);
        if measured.is_none() {
            tracing::debug!("glyph {:?} not measurable in '{}'", ch, font_family);
        }
        self.cache.insert(key, measured);
        measured.unwrap_or(0.0)
    }

    /// Physical height of one line of text.
    ///
    /// A line carrying any uppercase letter uses the uppercase metric;
    /// otherwise the x-height metric applies, with the default-ratio
    /// fallback when the font lacks one.
    pub fn line_height_cm(&self, line: &str, font: &Font, size_multiplier: f64) -> Option<f64> {
        let height = if line.chars().any(char::is_uppercase) {
            font.metrics.uppercase_height(&self.defaults)
        } else {
            font.metrics.lowercase_height(&self.defaults)
        };
        height.map(|h| h * size_multiplier)
    }

    /// Estimate the physical dimensions of multi-line text.
    ///
    /// Lines are stacked vertically: the total width is the widest line,
    /// the total height the sum of line heights plus a fixed leading of
    /// half the first line's height between consecutive lines.
    pub fn calculate_dimensions(
        &mut self,
        text: &str,
        font: &Font,
        size_multiplier: f64,
    ) -> TextDimensions {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return TextDimensions::default();
        }

        let mut max_width = 0.0_f64;
        let mut total_height = 0.0_f64;
        let mut first_line_height = 0.0_f64;

        for (idx, line) in lines.iter().enumerate() {
            let Some(line_height) = self.line_height_cm(line, font, size_multiplier) else {
                // Font has no usable metrics yet; nothing can be sized.
                return TextDimensions::default();
            };
            if idx == 0 {
                first_line_height = line_height;
            }

            let line_width: f64 = line
                .chars()
                .map(|ch| line_height * self.glyph_ratio(ch, &font.font_family))
                .sum();
            max_width = max_width.max(line_width);
            total_height += line_height;
        }

        let number_of_lines = lines.len();
        if number_of_lines > 1 {
            total_height += LINE_SPACING_FACTOR * first_line_height * (number_of_lines - 1) as f64;
        }

        let width_cm = round::dimension(max_width);
        let height_cm = round::dimension(total_height);

        TextDimensions {
            width_cm,
            height_cm,
            width_in: (width_cm / CONV_CM_INCH).ceil(),
            height_in: (height_cm / CONV_CM_INCH).ceil(),
            number_of_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontMetrics;
    use pretty_assertions::assert_eq;

    /// Backend returning the same ratio for every glyph; keeps width math
    /// exact in tests.
    struct FixedRatio(f64);

    impl GlyphMeasurer for FixedRatio {
        fn measure_ratio(&self, _ch: char, _font_family: &str) -> Option<f64> {
            Some(self.0)
        }
    }

    /// Backend that cannot measure anything.
    struct Unmeasurable;

    impl GlyphMeasurer for Unmeasurable {
        fn measure_ratio(&self, _ch: char, _font_family: &str) -> Option<f64> {
            None
        }
    }

    fn test_font() -> Font {
        Font::new(
            "Test Sans",
            FontMetrics::new(Some(7.0), Some(10.0)),
            "pricing-1",
        )
    }

    fn fixed_sizer(ratio: f64) -> TextSizer<FixedRatio> {
        TextSizer::with_backend(FixedRatio(ratio), MetricDefaults::default())
    }

    // ==================== empty / degenerate input ====================

    #[test]
    fn test_empty_text_is_zero() {
        let mut sizer = TextSizer::new();
        let dims = sizer.calculate_dimensions("", &test_font(), 1.0);
        assert_eq!(dims, TextDimensions::default());
        assert_eq!(dims.number_of_lines, 0);
        assert!(dims.is_zero());
    }

    #[test]
    fn test_whitespace_only_text_is_zero() {
        let mut sizer = TextSizer::new();
        let dims = sizer.calculate_dimensions("  \n\n   \n", &test_font(), 1.0);
        assert!(dims.is_zero());
    }

    #[test]
    fn test_font_without_metrics_is_zero() {
        let mut sizer = TextSizer::new();
        let font = Font::new("Unmeasured", FontMetrics::default(), "pricing-1");
        let dims = sizer.calculate_dimensions("Hello", &font, 1.0);
        assert!(dims.is_zero());
    }

    // ==================== line height ====================

    #[test]
    fn test_single_uppercase_line_height() {
        let mut sizer = fixed_sizer(0.5);
        let dims = sizer.calculate_dimensions("A", &test_font(), 1.0);
        assert_eq!(dims.height_cm, 10.0);
        assert_eq!(dims.number_of_lines, 1);
    }

    #[test]
    fn test_lowercase_line_uses_smallest_height() {
        let mut sizer = fixed_sizer(0.5);
        let dims = sizer.calculate_dimensions("abc", &test_font(), 1.0);
        assert_eq!(dims.height_cm, 7.0);
    }

    #[test]
    fn test_size_multiplier_scales_height() {
        let mut sizer = fixed_sizer(0.5);
        let dims = sizer.calculate_dimensions("A", &test_font(), 2.0);
        assert_eq!(dims.height_cm, 20.0);
    }

    #[test]
    fn test_lowercase_fallback_from_uppercase_metric() {
        let mut sizer = fixed_sizer(0.5);
        let font = Font::new("CapsOnly", FontMetrics::new(None, Some(10.0)), "pricing-1");
        let dims = sizer.calculate_dimensions("abc", &font, 1.0);
        // 10 * 0.7 default cap-height ratio
        assert_eq!(dims.height_cm, 7.0);
    }

    // ==================== multi-line stacking ====================

    #[test]
    fn test_two_line_height_with_leading() {
        let mut sizer = fixed_sizer(0.5);
        // Line 1 has uppercase (10 cm), line 2 has none (7 cm),
        // leading = 0.5 * 10 * 1
        let dims = sizer.calculate_dimensions("Hi\nlo", &test_font(), 1.0);
        assert_eq!(dims.height_cm, 22.0);
        assert_eq!(dims.number_of_lines, 2);
    }

    #[test]
    fn test_width_is_max_line_not_sum() {
        let mut sizer = fixed_sizer(0.5);
        // Uppercase lines, height 10, ratio 0.5 -> 5 cm per char
        let dims = sizer.calculate_dimensions("AAAA\nAA", &test_font(), 1.0);
        assert_eq!(dims.width_cm, 20.0);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let mut sizer = fixed_sizer(0.5);
        let dims = sizer.calculate_dimensions("A\n\nA", &test_font(), 1.0);
        assert_eq!(dims.number_of_lines, 2);
        assert_eq!(dims.height_cm, 25.0);
    }

    // ==================== glyph measurement ====================

    #[test]
    fn test_unmeasurable_glyphs_contribute_zero_width() {
        let mut sizer = TextSizer::with_backend(Unmeasurable, MetricDefaults::default());
        let dims = sizer.calculate_dimensions("ABC", &test_font(), 1.0);
        assert_eq!(dims.width_cm, 0.0);
        // Height still computes from the line metric
        assert_eq!(dims.height_cm, 10.0);
    }

    #[test]
    fn test_ratio_cache_is_per_family() {
        let mut sizer = TextSizer::new();
        let a = sizer.glyph_ratio('A', "Family One");
        let b = sizer.glyph_ratio('A', "Family Two");
        assert_eq!(a, b);
        assert_eq!(sizer.cache.len(), 2);
    }

    // ==================== unit conversion ====================

    #[test]
    fn test_inches_round_up() {
        let mut sizer = fixed_sizer(0.5);
        // Width 4 chars * 5 cm = 20 cm -> 7.87 in -> 8; height 10 cm -> 4
        let dims = sizer.calculate_dimensions("AAAA", &test_font(), 1.0);
        assert_eq!(dims.width_in, 8.0);
        assert_eq!(dims.height_in, 4.0);
    }
}
