//! DXF entity extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dxf::entities::EntityType;
use dxf::Drawing;

use platequote_core::{Circle, EntitySet, Point2D, Polyline};

use crate::error::{DxfError, Result};

/// Reads a DXF file into the analysis engine's entity lists.
///
/// Only the entity types the engine understands are extracted: lightweight
/// and classic polylines (with their closed flag and vertex order
/// preserved) and circles. Arcs, splines, and every other entity type are
/// skipped; the engine's scope is closed outlines and circular cut-outs.
pub fn read_drawing(path: impl AsRef<Path>) -> Result<EntitySet> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let drawing = Drawing::load(&mut reader).map_err(|e| match e {
        dxf::DxfError::IoError(io) => DxfError::Io(io),
        other => DxfError::Parse(other.to_string()),
    })?;

    Ok(entities_from_drawing(&drawing))
}

/// Extracts polyline and circle entities from an in-memory drawing.
pub fn entities_from_drawing(drawing: &Drawing) -> EntitySet {
    let mut entities = EntitySet::new();
    let mut skipped = 0usize;

    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::LwPolyline(lw) => {
                let points = lw
                    .vertices
                    .iter()
                    .map(|v| Point2D::new(v.x, v.y))
                    .collect();
                entities
                    .polylines
                    .push(Polyline::new(points, lw.is_closed()));
            }
            EntityType::Polyline(polyline) => {
                let points = polyline
                    .vertices()
                    .map(|v| Point2D::new(v.location.x, v.location.y))
                    .collect();
                entities
                    .polylines
                    .push(Polyline::new(points, polyline.is_closed()));
            }
            EntityType::Circle(circle) => {
                entities.circles.push(Circle::new(
                    Point2D::new(circle.center.x, circle.center.y),
                    circle.radius,
                ));
            }
            _ => {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("skipped {} unsupported DXF entities", skipped);
    }

    entities
}
