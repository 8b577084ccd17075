//! Net area and total perimeter aggregation.

use crate::entity::Point2D;
use crate::geom::{circle, polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Area and perimeter of a single shape, in drawing units.
///
/// Both values are non-negative. Metrics are computed on demand per
/// pipeline run; nothing is cached across runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeMetrics {
    pub area: f64,
    pub perimeter: f64,
}

impl ShapeMetrics {
    /// Metrics of a closed vertex ring.
    pub fn from_ring(points: &[Point2D]) -> Self {
        Self {
            area: polygon::area(points),
            perimeter: polygon::perimeter(points),
        }
    }

    /// Metrics of a circle (area and circumference).
    pub fn from_circle(radius: f64) -> Self {
        Self {
            area: circle::area(radius),
            perimeter: circle::circumference(radius),
        }
    }
}

/// The containment decision for one circle entity.
#[derive(Debug, Clone, Copy)]
pub struct CircleDecision {
    /// Index into the drawing's circle list.
    pub index: usize,

    /// Area and circumference of the circle.
    pub metrics: ShapeMetrics,

    /// Whether the circle's center lies inside the outer boundary. Circles
    /// failing this test are excluded from both sums.
    pub contained: bool,
}

/// Aggregated totals in drawing units, before unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Outer area minus every interior polyline area and every contained
    /// circle area. Can go negative when interior areas exceed the outer
    /// area; that anomaly is reported, not clamped.
    pub net_area: f64,

    /// Outer perimeter plus the perimeter of every shape that contributed
    /// to the net area.
    pub total_perimeter: f64,

    /// Indices of circles excluded because their center fell outside the
    /// outer boundary.
    pub excluded_circles: Vec<usize>,
}

/// Combines outer, interior-polyline, and circle metrics into net area and
/// total cutting perimeter.
pub fn aggregate(
    outer: ShapeMetrics,
    interior: &[ShapeMetrics],
    circles: &[CircleDecision],
) -> Totals {
    let mut net_area = outer.area;
    let mut total_perimeter = outer.perimeter;
    let mut excluded_circles = Vec::new();

    for metrics in interior {
        net_area -= metrics.area;
        total_perimeter += metrics.perimeter;
    }

    for decision in circles {
        if decision.contained {
            net_area -= decision.metrics.area;
            total_perimeter += decision.metrics.perimeter;
        } else {
            excluded_circles.push(decision.index);
        }
    }

    Totals {
        net_area,
        total_perimeter,
        excluded_circles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_outer_only() {
        let outer = ShapeMetrics {
            area: 4_000_000.0,
            perimeter: 8000.0,
        };
        let totals = aggregate(outer, &[], &[]);
        assert_relative_eq!(totals.net_area, 4_000_000.0);
        assert_relative_eq!(totals.total_perimeter, 8000.0);
        assert!(totals.excluded_circles.is_empty());
    }

    #[test]
    fn test_interior_polylines_subtract_area_and_add_perimeter() {
        let outer = ShapeMetrics {
            area: 4_000_000.0,
            perimeter: 8000.0,
        };
        let cutout = ShapeMetrics {
            area: 250_000.0,
            perimeter: 2000.0,
        };
        let totals = aggregate(outer, &[cutout], &[]);
        assert_relative_eq!(totals.net_area, 3_750_000.0);
        assert_relative_eq!(totals.total_perimeter, 10_000.0);
    }

    #[test]
    fn test_contained_circle_contributes_both_sums() {
        let outer = ShapeMetrics {
            area: 1_000_000.0,
            perimeter: 4000.0,
        };
        let decision = CircleDecision {
            index: 0,
            metrics: ShapeMetrics::from_circle(100.0),
            contained: true,
        };
        let totals = aggregate(outer, &[], &[decision]);
        assert_relative_eq!(totals.net_area, 1_000_000.0 - 10_000.0 * PI);
        assert_relative_eq!(totals.total_perimeter, 4000.0 + 200.0 * PI);
    }

    #[test]
    fn test_excluded_circle_touches_neither_sum() {
        let outer = ShapeMetrics {
            area: 1_000_000.0,
            perimeter: 4000.0,
        };
        let decision = CircleDecision {
            index: 3,
            metrics: ShapeMetrics::from_circle(100.0),
            contained: false,
        };
        let totals = aggregate(outer, &[], &[decision]);
        assert_relative_eq!(totals.net_area, 1_000_000.0);
        assert_relative_eq!(totals.total_perimeter, 4000.0);
        assert_eq!(totals.excluded_circles, vec![3]);
    }

    #[test]
    fn test_negative_net_area_is_not_clamped() {
        let outer = ShapeMetrics {
            area: 100.0,
            perimeter: 40.0,
        };
        let cutouts = [
            ShapeMetrics {
                area: 60.0,
                perimeter: 30.0,
            },
            ShapeMetrics {
                area: 70.0,
                perimeter: 34.0,
            },
        ];
        let totals = aggregate(outer, &cutouts, &[]);
        assert_relative_eq!(totals.net_area, -30.0);
        assert_relative_eq!(totals.total_perimeter, 104.0);
    }
}
