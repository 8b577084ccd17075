//! Integration tests for platequote-core.

use platequote_core::{
    Analyzer, AnalyzerConfig, Circle, EntitySet, Error, Point2D, Polyline, ShapeId, Warning,
};

fn square(x: f64, y: f64, size: f64) -> Polyline {
    Polyline::closed(vec![
        Point2D::new(x, y),
        Point2D::new(x + size, y),
        Point2D::new(x + size, y + size),
        Point2D::new(x, y + size),
    ])
}

mod end_to_end {
    use super::*;

    #[test]
    fn test_plate_with_square_cutout() {
        // 2000×2000 mm outer, 500×500 mm cut-out fully inside
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 2000.0))
            .with_polyline(square(500.0, 500.0, 500.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        assert!((result.net_area - 3.75).abs() < 1e-9);
        assert!((result.total_perimeter - 10.0).abs() < 1e-9);
        assert!(result.validation.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_plate_with_contained_circle() {
        // 2000×2000 mm outer with a 100 mm-radius hole at the middle
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 2000.0))
            .with_circle(Circle::new(Point2D::new(1000.0, 1000.0), 100.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        let circle_area_m2 = std::f64::consts::PI * 0.1 * 0.1;
        let circumference_m = 2.0 * std::f64::consts::PI * 0.1;
        assert!((result.net_area - (4.0 - circle_area_m2)).abs() < 1e-9);
        assert!((result.total_perimeter - (8.0 + circumference_m)).abs() < 1e-9);
        assert!(result.validation.valid);
    }

    #[test]
    fn test_circle_outside_boundary_excluded_with_warning() {
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 2000.0))
            .with_circle(Circle::new(Point2D::new(2500.0, 1000.0), 100.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        // Net area unaffected by the excluded circle
        assert!((result.net_area - 4.0).abs() < 1e-9);
        assert!((result.total_perimeter - 8.0).abs() < 1e-9);
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, Warning::CircleExcluded { index: 0, .. })));
    }

    #[test]
    fn test_no_closed_polylines_is_a_structured_failure() {
        let entities = EntitySet::new()
            .with_polyline(Polyline::open(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(100.0, 0.0),
                Point2D::new(100.0, 100.0),
            ]))
            .with_circle(Circle::new(Point2D::new(50.0, 50.0), 10.0));

        let outcome = Analyzer::default().analyze(&entities);
        assert!(matches!(outcome, Err(Error::NoClosedShapes)));
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 1500.0))
            .with_polyline(square(200.0, 200.0, 300.0))
            .with_polyline(Polyline::open(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 10.0),
            ]))
            .with_circle(Circle::new(Point2D::new(1000.0, 1000.0), 75.0));

        let analyzer = Analyzer::default();
        let a = analyzer.analyze(&entities).unwrap();
        let b = analyzer.analyze(&entities).unwrap();
        assert_eq!(a, b);
    }
}

mod warnings {
    use super::*;

    #[test]
    fn test_open_polylines_counted_and_excluded() {
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 1000.0))
            .with_polyline(Polyline::open(vec![
                Point2D::new(10.0, 10.0),
                Point2D::new(600.0, 10.0),
            ]))
            .with_polyline(Polyline::open(vec![
                Point2D::new(20.0, 20.0),
                Point2D::new(20.0, 700.0),
            ]));

        let result = Analyzer::default().analyze(&entities).unwrap();

        // The open polylines do not change any sum
        assert!((result.net_area - 1.0).abs() < 1e-9);
        assert!((result.total_perimeter - 4.0).abs() < 1e-9);
        assert!(result
            .warnings
            .contains(&Warning::OpenPolylines { count: 2 }));
    }

    #[test]
    fn test_interior_shape_escaping_boundary_flags_result() {
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 1000.0))
            // Overlaps the outer edge: two vertices outside
            .with_polyline(square(800.0, 800.0, 400.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        assert!(!result.validation.valid);
        assert_eq!(result.validation.violations.len(), 1);
        assert_eq!(
            result.validation.violations[0].shape,
            ShapeId::Polyline(1)
        );
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(
                w,
                Warning::ContainmentViolation {
                    shape: ShapeId::Polyline(1)
                }
            )));

        // Non-fatal: the numeric answer is still produced, with the
        // escaping shape's full area subtracted as-is
        assert!((result.net_area - (1.0 - 0.16)).abs() < 1e-9);
    }

    #[test]
    fn test_negative_net_area_reported_not_clamped() {
        // Outer 10×10 with three 6×6 cut-outs: 100 − 108 = −8
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 10.0))
            .with_polyline(square(1.0, 1.0, 6.0))
            .with_polyline(square(2.0, 2.0, 6.0))
            .with_polyline(square(3.0, 3.0, 6.0));

        let analyzer = Analyzer::new(AnalyzerConfig::native_units());
        let result = analyzer.analyze(&entities).unwrap();

        assert!((result.net_area - (-8.0)).abs() < 1e-9);
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, Warning::NegativeNetArea { .. })));
    }

    #[test]
    fn test_degenerate_interior_ring_is_observable() {
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 1000.0))
            .with_polyline(Polyline::closed(vec![
                Point2D::new(100.0, 100.0),
                Point2D::new(200.0, 200.0),
            ]));

        let result = Analyzer::default().analyze(&entities).unwrap();

        // Zero metrics: sums are unchanged apart from the warning
        assert!((result.net_area - 1.0).abs() < 1e-9);
        assert!(result.warnings.contains(&Warning::DegenerateGeometry {
            shape: ShapeId::Polyline(1)
        }));
    }
}

mod classification {
    use super::*;

    #[test]
    fn test_outer_is_largest_regardless_of_input_order() {
        let entities = EntitySet::new()
            .with_polyline(square(100.0, 100.0, 200.0))
            .with_polyline(square(0.0, 0.0, 2000.0))
            .with_polyline(square(400.0, 400.0, 100.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        // Outer is the 2000×2000 square; the other two are cut-outs
        assert!((result.outer.area - 4.0).abs() < 1e-9);
        let expected_net = 4.0 - 0.04 - 0.01;
        assert!((result.net_area - expected_net).abs() < 1e-9);
    }

    #[test]
    fn test_equal_area_tie_is_deterministic() {
        // Two identical squares far apart: the first becomes the outer and
        // the second is (correctly) reported as escaping it
        let entities = EntitySet::new()
            .with_polyline(square(0.0, 0.0, 500.0))
            .with_polyline(square(5000.0, 5000.0, 500.0));

        let result = Analyzer::default().analyze(&entities).unwrap();

        assert!(!result.validation.valid);
        assert_eq!(
            result.validation.violations[0].shape,
            ShapeId::Polyline(1)
        );
        // net = 0.25 − 0.25 = 0
        assert!(result.net_area.abs() < 1e-9);
    }
}
