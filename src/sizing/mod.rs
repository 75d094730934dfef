//! Text dimension estimation from font metrics.

pub mod measure;
pub mod text;

pub use measure::{GlyphMeasurer, RatioTable};
pub use text::{TextDimensions, TextSizer};
