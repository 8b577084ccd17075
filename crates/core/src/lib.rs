//! # platequote-core
//!
//! Geometry analysis engine for flat cut parts.
//!
//! Given one drawing's entities (closed and open polylines plus circles),
//! the engine designates the largest closed polyline as the outer boundary,
//! treats every other closed shape as an interior cut-out, validates that
//! the cut-outs lie inside the boundary, and aggregates everything into the
//! part's net material area and total cutting perimeter.
//!
//! The engine is pure and synchronous: no I/O, no unit inference, no hidden
//! state. Anomalies that the original drawing tooling would merely print a
//! warning for (open polylines, shapes escaping the boundary, circles
//! outside it) are carried as typed [`Warning`] values on the successful
//! result; only a drawing with no closed polyline at all is a hard error.
//!
//! ## Quick Start
//!
//! ```rust
//! use platequote_core::{Analyzer, EntitySet, Point2D, Polyline};
//!
//! // 2 m × 2 m plate with a 0.5 m × 0.5 m cut-out, in millimeters
//! let entities = EntitySet::new()
//!     .with_polyline(Polyline::closed(vec![
//!         Point2D::new(0.0, 0.0),
//!         Point2D::new(2000.0, 0.0),
//!         Point2D::new(2000.0, 2000.0),
//!         Point2D::new(0.0, 2000.0),
//!     ]))
//!     .with_polyline(Polyline::closed(vec![
//!         Point2D::new(500.0, 500.0),
//!         Point2D::new(1000.0, 500.0),
//!         Point2D::new(1000.0, 1000.0),
//!         Point2D::new(500.0, 1000.0),
//!     ]));
//!
//! let result = Analyzer::default().analyze(&entities).unwrap();
//!
//! assert!((result.net_area - 3.75).abs() < 1e-9); // m²
//! assert!((result.total_perimeter - 10.0).abs() < 1e-9); // m
//! assert!(result.validation.valid);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aggregate;
pub mod classify;
pub mod entity;
pub mod error;
pub mod geom;
pub mod pipeline;
pub mod result;
pub mod validate;

// Re-exports
pub use aggregate::{aggregate, CircleDecision, ShapeMetrics, Totals};
pub use classify::{classify, ClassifiedShapes, IndexedPolyline};
pub use entity::{Circle, EntitySet, Point2D, Polyline};
pub use error::{Error, Result};
pub use geom::Aabb;
pub use pipeline::{Analyzer, AnalyzerConfig};
pub use result::{AnalysisResult, OuterSummary, ShapeId, Warning};
pub use validate::{validate, ValidationReport, Violation};
