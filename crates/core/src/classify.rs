//! Shape classification: outer boundary selection and interior partition.

use crate::entity::Polyline;
use crate::error::{Error, Result};
use crate::geom::polygon;

/// A polyline reference paired with its index in the original entity list.
///
/// The index is what identifies the shape in validation reports and
/// warnings, so it always refers to the caller's `polylines` slice, not to
/// any derived ordering.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPolyline<'a> {
    pub index: usize,
    pub polyline: &'a Polyline,
}

/// The outcome of classifying one drawing's polylines.
///
/// Borrowed from the input entity list; classification never copies vertex
/// data.
#[derive(Debug)]
pub struct ClassifiedShapes<'a> {
    /// The outer boundary: the closed polyline with the largest area.
    pub outer: IndexedPolyline<'a>,

    /// Every other closed polyline, in input order. These are the interior
    /// cut-outs.
    pub interior: Vec<IndexedPolyline<'a>>,

    /// Indices of open polylines. Open polylines never enter area or
    /// perimeter math; they are carried only so the caller can warn about
    /// them.
    pub open: Vec<usize>,
}

impl ClassifiedShapes<'_> {
    /// Number of open polylines found.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Partitions polylines into the outer boundary, interior cut-outs, and
/// open polylines.
///
/// The outer boundary is the closed polyline with the largest area. When
/// several closed polylines tie for the largest area, the first one in
/// input order wins; the comparison is a strict `>` while folding, which
/// makes the policy stable and reproducible rather than an accident of
/// iteration order.
///
/// Fails with [`Error::NoClosedShapes`] when the input contains no closed
/// polyline at all.
pub fn classify(polylines: &[Polyline]) -> Result<ClassifiedShapes<'_>> {
    let mut open = Vec::new();
    let mut closed: Vec<IndexedPolyline<'_>> = Vec::new();

    for (index, polyline) in polylines.iter().enumerate() {
        if polyline.is_closed() {
            closed.push(IndexedPolyline { index, polyline });
        } else {
            open.push(index);
        }
    }

    let mut best: Option<(usize, f64)> = None;
    for (pos, entry) in closed.iter().enumerate() {
        let area = polygon::area(&entry.polyline.points);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((pos, area)),
        }
    }

    let (outer_pos, _) = best.ok_or(Error::NoClosedShapes)?;
    let outer = closed.remove(outer_pos);

    Ok(ClassifiedShapes {
        outer,
        interior: closed,
        open,
    })
}
