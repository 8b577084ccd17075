//! Containment validation of interior shapes against the outer boundary.

use crate::classify::IndexedPolyline;
use crate::entity::{Circle, Polyline};
use crate::geom::polygon;
use crate::result::ShapeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single containment violation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    /// The shape that escapes the outer boundary.
    pub shape: ShapeId,

    /// Human-readable description of what was found outside.
    pub reason: String,
}

/// Report produced by containment validation.
///
/// Validation failure is data, not an error: the report travels on the
/// successful analysis result and never aborts the computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    /// True when every checked shape lies inside the outer boundary.
    pub valid: bool,

    /// All violations found, one per offending shape.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// A report with no violations.
    pub fn passed() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }
}

/// Verifies that interior shapes lie inside the outer boundary.
///
/// Every vertex of every interior polyline is tested against the outer
/// ring; the first vertex found outside flags that polyline and checking
/// moves on to the next shape, so the report collects one violation per
/// offending shape rather than stopping at the first overall.
///
/// Circles are tested by their center point only. Full-circle containment
/// (center inside but rim crossing the boundary) is not checked.
pub fn validate(
    outer: &Polyline,
    interior: &[IndexedPolyline<'_>],
    circles: &[(usize, &Circle)],
) -> ValidationReport {
    let ring = &outer.points;
    let mut violations = Vec::new();

    for entry in interior {
        let escaped = entry
            .polyline
            .points
            .iter()
            .find(|p| !polygon::contains_point(ring, **p));

        if let Some(vertex) = escaped {
            violations.push(Violation {
                shape: ShapeId::Polyline(entry.index),
                reason: format!(
                    "vertex ({:.3}, {:.3}) lies outside the outer boundary",
                    vertex.x, vertex.y
                ),
            });
        }
    }

    for (index, circle) in circles {
        if !polygon::contains_point(ring, circle.center) {
            violations.push(Violation {
                shape: ShapeId::Circle(*index),
                reason: format!(
                    "center ({:.3}, {:.3}) lies outside the outer boundary",
                    circle.center.x, circle.center.y
                ),
            });
        }
    }

    ValidationReport {
        valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Point2D;

    fn outer_square(size: f64) -> Polyline {
        Polyline::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(size, 0.0),
            Point2D::new(size, size),
            Point2D::new(0.0, size),
        ])
    }

    fn indexed(index: usize, polyline: &Polyline) -> IndexedPolyline<'_> {
        IndexedPolyline { index, polyline }
    }

    #[test]
    fn test_contained_shapes_pass() {
        let outer = outer_square(100.0);
        let inner = Polyline::closed(vec![
            Point2D::new(10.0, 10.0),
            Point2D::new(30.0, 10.0),
            Point2D::new(30.0, 30.0),
            Point2D::new(10.0, 30.0),
        ]);
        let circle = Circle::new(Point2D::new(60.0, 60.0), 5.0);

        let report = validate(&outer, &[indexed(1, &inner)], &[(0, &circle)]);
        assert!(report.valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_escaping_polyline_is_reported_once() {
        let outer = outer_square(100.0);
        // Two vertices outside, but the shape is reported a single time
        let escaping = Polyline::closed(vec![
            Point2D::new(90.0, 90.0),
            Point2D::new(150.0, 90.0),
            Point2D::new(150.0, 150.0),
            Point2D::new(90.0, 150.0),
        ]);

        let report = validate(&outer, &[indexed(2, &escaping)], &[]);
        assert!(!report.valid);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].shape, ShapeId::Polyline(2));
    }

    #[test]
    fn test_all_offending_shapes_are_collected() {
        let outer = outer_square(100.0);
        let escaping_a = Polyline::closed(vec![
            Point2D::new(-10.0, 5.0),
            Point2D::new(5.0, 5.0),
            Point2D::new(5.0, 20.0),
        ]);
        let inside = Polyline::closed(vec![
            Point2D::new(40.0, 40.0),
            Point2D::new(50.0, 40.0),
            Point2D::new(50.0, 50.0),
        ]);
        let outside_circle = Circle::new(Point2D::new(200.0, 50.0), 3.0);

        let report = validate(
            &outer,
            &[indexed(1, &escaping_a), indexed(2, &inside)],
            &[(0, &outside_circle)],
        );

        assert!(!report.valid);
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].shape, ShapeId::Polyline(1));
        assert_eq!(report.violations[1].shape, ShapeId::Circle(0));
    }

    #[test]
    fn test_circle_rim_crossing_is_not_detected() {
        // Center-only check: a circle whose rim pokes out still passes.
        let outer = outer_square(100.0);
        let rim_crosser = Circle::new(Point2D::new(95.0, 50.0), 20.0);

        let report = validate(&outer, &[], &[(0, &rim_crosser)]);
        assert!(report.valid);
    }
}
