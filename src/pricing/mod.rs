//! Size-boundary resolution and price quoting.

pub mod boundary;
pub mod quote;

pub use boundary::{resolve_boundary, shipping_cost};
pub use quote::{letter_cost, quote_price, PriceQuote, QuoteStatus};
