//! The analysis pipeline: classification, validation, aggregation, unit
//! conversion.

use crate::aggregate::{self, CircleDecision, ShapeMetrics};
use crate::classify;
use crate::entity::EntitySet;
use crate::error::Result;
use crate::geom::polygon;
use crate::result::{AnalysisResult, OuterSummary, ShapeId, Warning};
use crate::validate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the analyzer.
///
/// The scales convert drawing units into output units and are applied
/// exactly once, when the result is assembled, never inside the geometry
/// primitives. The defaults assume millimeter drawings and produce square
/// meters and meters.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalyzerConfig {
    /// Multiplier from drawing area units to output area units.
    pub area_scale: f64,

    /// Multiplier from drawing length units to output length units.
    pub length_scale: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        // mm² → m², mm → m
        Self {
            area_scale: 1.0 / 1_000_000.0,
            length_scale: 1.0 / 1000.0,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a configuration with the default millimeter-to-meter scales.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the area conversion factor.
    pub fn with_area_scale(mut self, scale: f64) -> Self {
        self.area_scale = scale;
        self
    }

    /// Sets the length conversion factor.
    pub fn with_length_scale(mut self, scale: f64) -> Self {
        self.length_scale = scale;
        self
    }

    /// Keeps all results in drawing units (scale 1.0 for both factors).
    pub fn native_units() -> Self {
        Self {
            area_scale: 1.0,
            length_scale: 1.0,
        }
    }
}

/// Analyzes one drawing's entity set into net area, total cutting
/// perimeter, and advisory warnings.
///
/// The analyzer is a pure function of its inputs: analyzing the same
/// entity set twice yields identical results, and independent drawings can
/// be analyzed from separate threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full analysis over one drawing's entities.
    ///
    /// Fails only when the drawing has no closed polyline
    /// ([`Error::NoClosedShapes`](crate::Error::NoClosedShapes)); every
    /// other anomaly is recorded as a [`Warning`] on the successful result
    /// and the computation continues.
    pub fn analyze(&self, entities: &EntitySet) -> Result<AnalysisResult> {
        let shapes = classify::classify(&entities.polylines)?;
        let mut warnings = Vec::new();

        if shapes.outer.polyline.points.len() < 3 {
            let shape = ShapeId::Polyline(shapes.outer.index);
            log::warn!("{} is degenerate; metrics default to zero", shape);
            warnings.push(Warning::DegenerateGeometry { shape });
        }
        for entry in &shapes.interior {
            if entry.polyline.points.len() < 3 {
                let shape = ShapeId::Polyline(entry.index);
                log::warn!("{} is degenerate; metrics default to zero", shape);
                warnings.push(Warning::DegenerateGeometry { shape });
            }
        }

        if shapes.open_count() > 0 {
            log::warn!(
                "{} open polyline(s) found; excluded from analysis",
                shapes.open_count()
            );
            warnings.push(Warning::OpenPolylines {
                count: shapes.open_count(),
            });
        }

        let ring = &shapes.outer.polyline.points;

        let decisions: Vec<CircleDecision> = entities
            .circles
            .iter()
            .enumerate()
            .map(|(index, circle)| CircleDecision {
                index,
                metrics: ShapeMetrics::from_circle(circle.radius),
                contained: polygon::contains_point(ring, circle.center),
            })
            .collect();

        let contained: Vec<_> = decisions
            .iter()
            .filter(|d| d.contained)
            .map(|d| (d.index, &entities.circles[d.index]))
            .collect();

        let report = validate::validate(shapes.outer.polyline, &shapes.interior, &contained);
        for violation in &report.violations {
            log::warn!("{}: {}", violation.shape, violation.reason);
            warnings.push(Warning::ContainmentViolation {
                shape: violation.shape,
            });
        }

        let outer_metrics = ShapeMetrics::from_ring(ring);
        let interior_metrics: Vec<ShapeMetrics> = shapes
            .interior
            .iter()
            .map(|entry| ShapeMetrics::from_ring(&entry.polyline.points))
            .collect();

        let totals = aggregate::aggregate(outer_metrics, &interior_metrics, &decisions);

        for &index in &totals.excluded_circles {
            let center = entities.circles[index].center;
            log::warn!("circle #{} lies outside the outer boundary; excluded", index);
            warnings.push(Warning::CircleExcluded { index, center });
        }

        let net_area = totals.net_area * self.config.area_scale;
        if totals.net_area < 0.0 {
            log::warn!("net area is negative: {}", net_area);
            warnings.push(Warning::NegativeNetArea { net_area });
        }

        let bbox = polygon::bounding_box(ring).unwrap_or_default();

        Ok(AnalysisResult {
            net_area,
            total_perimeter: totals.total_perimeter * self.config.length_scale,
            outer: OuterSummary {
                area: outer_metrics.area * self.config.area_scale,
                perimeter: outer_metrics.perimeter * self.config.length_scale,
                width: bbox.width() * self.config.length_scale,
                height: bbox.height() * self.config.length_scale,
            },
            validation: report,
            warnings,
        })
    }
}
