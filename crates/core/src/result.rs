//! Analysis result and warning types.

use std::fmt;

use crate::entity::Point2D;
use crate::validate::ValidationReport;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a shape within one drawing's entity lists.
///
/// Indices refer to the original `EntitySet` lists handed to the analyzer,
/// so a consumer can map a warning back to the entity that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeId {
    /// Index into `EntitySet::polylines`.
    Polyline(usize),
    /// Index into `EntitySet::circles`.
    Circle(usize),
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeId::Polyline(i) => write!(f, "polyline #{}", i),
            ShapeId::Circle(i) => write!(f, "circle #{}", i),
        }
    }
}

/// Advisory anomalies found during analysis.
///
/// Warnings never abort the computation; they travel with the successful
/// result and the consumer decides how to surface them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Warning {
    /// Open polylines were found and excluded from all geometry math.
    OpenPolylines { count: usize },

    /// A circle's center lies outside the outer boundary; the circle was
    /// excluded from the net-area and perimeter sums.
    CircleExcluded { index: usize, center: Point2D },

    /// An interior shape extends beyond the outer boundary.
    ContainmentViolation { shape: ShapeId },

    /// Interior areas exceed the outer area. The value is reported as-is;
    /// it signals a geometric inconsistency in the drawing.
    NegativeNetArea { net_area: f64 },

    /// A closed ring with fewer than 3 vertices contributed zero metrics.
    DegenerateGeometry { shape: ShapeId },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::OpenPolylines { count } => {
                write!(f, "{} open polyline(s) excluded from analysis", count)
            }
            Warning::CircleExcluded { index, center } => write!(
                f,
                "circle #{} at ({:.3}, {:.3}) lies outside the outer boundary and was excluded",
                index, center.x, center.y
            ),
            Warning::ContainmentViolation { shape } => {
                write!(f, "{} extends beyond the outer boundary", shape)
            }
            Warning::NegativeNetArea { net_area } => write!(
                f,
                "net area is negative ({:.6}): interior shapes exceed the outer boundary area",
                net_area
            ),
            Warning::DegenerateGeometry { shape } => {
                write!(f, "{} has fewer than 3 vertices; zero area assumed", shape)
            }
        }
    }
}

/// Summary of the outer boundary, in output units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OuterSummary {
    /// Outer boundary area (square meters with the default configuration).
    pub area: f64,
    /// Outer boundary perimeter (meters with the default configuration).
    pub perimeter: f64,
    /// Bounding-box width of the outer boundary (meters).
    pub width: f64,
    /// Bounding-box height of the outer boundary (meters).
    pub height: f64,
}

/// The result of analyzing one drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// Net material area: outer area minus contained interior areas.
    /// Square meters with the default configuration. Negative values are
    /// possible and flagged via [`Warning::NegativeNetArea`].
    pub net_area: f64,

    /// Total cutting perimeter: outer plus every contributing interior
    /// shape. Meters with the default configuration.
    pub total_perimeter: f64,

    /// Outer boundary summary.
    pub outer: OuterSummary,

    /// Containment validation outcome.
    pub validation: ValidationReport,

    /// Advisory anomalies, in the order they were detected.
    pub warnings: Vec<Warning>,
}

impl AnalysisResult {
    /// Returns true if the analysis completed without any advisory
    /// warnings and validation passed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.validation.valid
    }

    /// Renders the warnings as display strings, ready for a report or log.
    pub fn diagnostics(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}
