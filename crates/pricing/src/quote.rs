//! The quotation formula.
//!
//! Pure arithmetic over the two scalars the analysis engine produces (net
//! area in m², total cutting perimeter in m) plus an order quantity. The
//! margin shrinks linearly as the production price grows, and the maximum
//! quantity discount shrinks with the margin, so cheap parts carry both
//! the largest margin and the deepest possible volume discounts.

use crate::config::PricingConfig;
use crate::result::QuoteBreakdown;

/// Computes the profit margin (as a fraction) for a production price.
///
/// Falls linearly from 0.60 at zero to 0.30 at `pp_reference`, and stays
/// at 0.30 for anything above it.
pub fn linear_margin(production_price: f64, pp_reference: f64) -> f64 {
    if production_price <= pp_reference {
        0.60 - 0.30 * (production_price / pp_reference)
    } else {
        0.30
    }
}

/// Computes the maximum allowed discount (in percent) for a margin.
///
/// Linear in the margin percentage, clamped to the 25–55% band: the
/// maximum discount falls from ~55% at a 60% margin to ~25% at a 30%
/// margin.
pub fn max_discount_percent(margin: f64) -> f64 {
    let discount = 0.9167 * (margin * 100.0) - 0.7143;
    discount.clamp(25.0, 55.0)
}

/// Computes the discount (in percent) granted for an order quantity,
/// stepping down from the maximum as the quantity shrinks. Never negative.
pub fn quantity_discount_percent(quantity: u32, max_discount: f64) -> f64 {
    let discount = match quantity {
        q if q >= 200 => max_discount,
        q if q >= 150 => max_discount - 5.0,
        q if q >= 100 => max_discount - 10.0,
        q if q >= 50 => max_discount - 20.0,
        q if q >= 10 => max_discount - 25.0,
        q if q >= 2 => max_discount - 35.0,
        _ => 0.0,
    };
    discount.max(0.0)
}

/// Computes the full price breakdown for one part.
///
/// `net_area` is in square meters and `total_perimeter` in meters, as
/// produced by the analysis engine. A quantity of zero is treated as one.
pub fn compute_quote(
    config: &PricingConfig,
    net_area: f64,
    total_perimeter: f64,
    quantity: u32,
) -> QuoteBreakdown {
    let quantity = quantity.max(1);
    let n = f64::from(quantity);

    let production_price = config.area_cost * net_area + config.cut_cost * total_perimeter;

    let margin = linear_margin(production_price, config.pp_reference);
    let unit_price_before_discount = production_price / (1.0 - margin);

    let max_discount = max_discount_percent(margin);
    let discount_percent = quantity_discount_percent(quantity, max_discount);

    let mut unit_price = unit_price_before_discount * (1.0 - discount_percent / 100.0);
    let mut total_price = unit_price * n;

    if total_price < config.minimum_total {
        total_price = config.minimum_total;
        unit_price = total_price / n;
    }

    let margin_per_unit = unit_price - production_price;
    let total_margin = margin_per_unit * n;
    let profit_percent_per_unit = if unit_price != 0.0 {
        margin_per_unit / unit_price * 100.0
    } else {
        0.0
    };

    QuoteBreakdown {
        production_price,
        margin_percent: margin * 100.0,
        unit_price_before_discount,
        discount_percent,
        unit_price,
        total_price,
        margin_per_unit,
        total_margin,
        profit_percent_per_unit,
    }
}
