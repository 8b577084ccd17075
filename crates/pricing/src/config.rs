//! Configuration for quotation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cost and policy parameters for the quotation formula.
///
/// Monetary values are in the shop's currency; the formula never converts
/// units, it only combines the analyzed net area (m²) and cutting
/// perimeter (m) with these rates.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingConfig {
    /// Material cost per square meter of net area.
    pub area_cost: f64,

    /// Cutting cost per meter of perimeter.
    pub cut_cost: f64,

    /// Production-price reference for the linear margin: the margin falls
    /// from 60% at zero toward 30% at this price and stays at 30% above it.
    pub pp_reference: f64,

    /// Minimum total price per order. When the discounted total falls
    /// below this, the total is raised to it and the unit price readjusted.
    pub minimum_total: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            area_cost: 90_000.0,
            cut_cost: 6_000.0,
            pp_reference: 500_000.0,
            minimum_total: 59_000.0,
        }
    }
}

impl PricingConfig {
    /// Creates a configuration with the default rates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the material cost per square meter.
    pub fn with_area_cost(mut self, cost: f64) -> Self {
        self.area_cost = cost;
        self
    }

    /// Sets the cutting cost per meter.
    pub fn with_cut_cost(mut self, cost: f64) -> Self {
        self.cut_cost = cost;
        self
    }

    /// Sets the production-price reference for the margin curve.
    pub fn with_pp_reference(mut self, reference: f64) -> Self {
        self.pp_reference = reference;
        self
    }

    /// Sets the minimum total price per order.
    pub fn with_minimum_total(mut self, minimum: f64) -> Self {
        self.minimum_total = minimum;
        self
    }
}
