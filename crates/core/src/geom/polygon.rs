//! Polygon metrics and point containment.
//!
//! Vertex sequences are treated as cyclic rings: the last vertex pairs with
//! the first, so callers do not need to duplicate the starting point at the
//! end. Winding direction is not constrained; area is reported as a
//! magnitude via [`area`], with the signed value available from
//! [`signed_area`].

use super::Aabb;
use crate::entity::Point2D;

/// Computes the signed shoelace area of a cyclic vertex ring.
///
/// Positive for counter-clockwise winding, negative for clockwise.
/// Returns 0.0 for degenerate rings (fewer than 3 vertices).
pub fn signed_area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        sum += p1.x * p2.y - p2.x * p1.y;
    }
    sum / 2.0
}

/// Computes the unsigned area of a cyclic vertex ring.
///
/// Exact for simple (non-self-intersecting) polygons. Degenerate rings
/// (fewer than 3 vertices, or collinear vertices) yield 0.0 rather than an
/// error.
pub fn area(points: &[Point2D]) -> f64 {
    signed_area(points).abs()
}

/// Computes the perimeter of a cyclic vertex ring: the sum of Euclidean
/// distances between consecutive vertices, including the closing edge from
/// the last vertex back to the first.
///
/// Degenerate rings (fewer than 3 vertices) yield 0.0, matching [`area`];
/// cyclic pairing would otherwise double-count a two-vertex segment.
pub fn perimeter(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut total = 0.0;
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        total += p1.distance_to(p2);
    }
    total
}

/// Computes the axis-aligned bounding box of a vertex sequence.
///
/// Returns `None` for an empty sequence.
pub fn bounding_box(points: &[Point2D]) -> Option<Aabb> {
    let first = points.first()?;

    let mut aabb = Aabb::new(first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        aabb.min_x = aabb.min_x.min(p.x);
        aabb.min_y = aabb.min_y.min(p.y);
        aabb.max_x = aabb.max_x.max(p.x);
        aabb.max_y = aabb.max_y.max(p.y);
    }
    Some(aabb)
}

/// Returns the (width, height) extent of a vertex sequence, or `None` for
/// an empty sequence.
pub fn extent(points: &[Point2D]) -> Option<(f64, f64)> {
    bounding_box(points).map(|b| b.extent())
}

/// Tests whether a point lies inside a cyclic vertex ring using the
/// even-odd (ray casting) rule with a horizontal ray toward +x.
///
/// Horizontal edges are skipped; for every other edge crossing the point's
/// height (`(y1 > y) != (y2 > y)`), the crossing x is found by linear
/// interpolation and the inside flag toggles when the point lies left of
/// it. Points exactly on the ring may be classified either way; this is
/// inherent to the parity rule and callers must not rely on a particular
/// answer there.
pub fn contains_point(ring: &[Point2D], point: Point2D) -> bool {
    let n = ring.len();
    let mut inside = false;

    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];

        if p1.y == p2.y {
            // Horizontal edge: cannot cross the ray, and would divide by zero
            continue;
        }

        if (p1.y > point.y) != (p2.y > point.y) {
            let x_intersect = (p2.x - p1.x) * (point.y - p1.y) / (p2.y - p1.y) + p1.x;
            if point.x < x_intersect {
                inside = !inside;
            }
        }
    }

    inside
}
