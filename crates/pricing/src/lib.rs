//! # platequote-pricing
//!
//! Quotation formula for analyzed cut parts.
//!
//! Consumes the two scalars the analysis engine produces (net material
//! area in m², total cutting perimeter in m) plus an order quantity, and
//! returns a full price breakdown. This crate holds no geometric content;
//! it is the pricing collaborator on the other side of the engine's output
//! boundary.
//!
//! ```rust
//! use platequote_pricing::{compute_quote, PricingConfig};
//!
//! let config = PricingConfig::default();
//! let quote = compute_quote(&config, 3.75, 10.0, 7);
//!
//! assert!(quote.total_price >= config.minimum_total);
//! assert!(quote.unit_price <= quote.unit_price_before_discount);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod quote;
pub mod result;

pub use config::PricingConfig;
pub use quote::{compute_quote, linear_margin, max_discount_percent, quantity_discount_percent};
pub use result::QuoteBreakdown;
