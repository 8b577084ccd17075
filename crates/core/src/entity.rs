//! Input entity types handed over by the drawing parser.
//!
//! The analysis engine only reads these; it never mutates or re-orders the
//! entity lists it receives. Coordinates are in the drawing's native linear
//! unit (millimeters for the drawings this engine is built for); no unit
//! inference happens here.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A polyline entity: an ordered vertex sequence with a closed flag.
///
/// Vertex order defines winding and is significant; winding direction is
/// not constrained. A closed polyline is treated as a cyclic ring: the
/// first vertex does not need to be repeated at the end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    /// Ordered vertices.
    pub points: Vec<Point2D>,

    /// Whether the vertex sequence forms a closed ring.
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline.
    pub fn new(points: Vec<Point2D>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a closed polyline.
    pub fn closed(points: Vec<Point2D>) -> Self {
        Self::new(points, true)
    }

    /// Creates an open polyline.
    pub fn open(points: Vec<Point2D>) -> Self {
        Self::new(points, false)
    }

    /// Returns true if the polyline forms a closed ring.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A circle entity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Point2D,
    /// Radius in drawing units. Positive in any valid drawing.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The entity lists for one drawing, as produced by the parsing layer.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntitySet {
    pub polylines: Vec<Polyline>,
    pub circles: Vec<Circle>,
}

impl EntitySet {
    /// Creates an empty entity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polyline.
    pub fn with_polyline(mut self, polyline: Polyline) -> Self {
        self.polylines.push(polyline);
        self
    }

    /// Adds a circle.
    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.circles.push(circle);
        self
    }

    /// Returns true if the set contains no entities at all.
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.circles.is_empty()
    }

    /// Checks the entity contracts: every polyline has at least one vertex
    /// and every circle has a positive radius.
    ///
    /// The analysis pipeline does not call this itself (parsers are
    /// expected to produce well-formed entities), but callers ingesting
    /// entities from less trusted sources can use it as a guard.
    pub fn validate(&self) -> Result<()> {
        for (i, polyline) in self.polylines.iter().enumerate() {
            if polyline.points.is_empty() {
                return Err(Error::InvalidGeometry(format!(
                    "polyline #{} has no vertices",
                    i
                )));
            }
        }

        for (i, circle) in self.circles.iter().enumerate() {
            if circle.radius <= 0.0 {
                return Err(Error::InvalidGeometry(format!(
                    "circle #{} has non-positive radius {}",
                    i, circle.radius
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(b), 5.0);
        assert_relative_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_entity_set_builders() {
        let set = EntitySet::new()
            .with_polyline(Polyline::closed(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
            ]))
            .with_circle(Circle::new(Point2D::new(0.5, 0.5), 0.1));

        assert!(!set.is_empty());
        assert_eq!(set.polylines.len(), 1);
        assert_eq!(set.circles.len(), 1);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_polyline() {
        let set = EntitySet::new().with_polyline(Polyline::closed(vec![]));
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_radius() {
        let set = EntitySet::new().with_circle(Circle::new(Point2D::new(0.0, 0.0), 0.0));
        assert!(set.validate().is_err());

        let set = EntitySet::new().with_circle(Circle::new(Point2D::new(0.0, 0.0), -2.0));
        assert!(set.validate().is_err());
    }
}
