//! Quotation result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full price breakdown for one part and quantity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteBreakdown {
    /// Production price per unit: material plus cutting cost.
    pub production_price: f64,

    /// Margin applied, in percent.
    pub margin_percent: f64,

    /// Unit sale price before any quantity discount.
    pub unit_price_before_discount: f64,

    /// Quantity discount applied, in percent.
    pub discount_percent: f64,

    /// Unit price after the discount (and after the minimum-total
    /// adjustment, when it binds).
    pub unit_price: f64,

    /// Total order price.
    pub total_price: f64,

    /// Margin earned per unit.
    pub margin_per_unit: f64,

    /// Margin earned over the whole order.
    pub total_margin: f64,

    /// Profit as a percentage of the unit price.
    pub profit_percent_per_unit: f64,
}
