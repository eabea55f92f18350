mod support;

use equipotential::contour::{
    self, ContourFailure, ContourTracer, DEFAULT_SEED_OFFSET, TraceOutcome, TraceParams,
    trace_around_charges,
};
use equipotential::errors::ExtractionError;
use equipotential::field::{ChargeField, ScalarField2};
use equipotential::float_types::{PI, Real};
use nalgebra::Point2;
use support::{approx_eq, dipole, single_charge};

#[test]
fn single_charge_traces_a_closed_circle() {
    // V = 1 / r, so the level 5 curve is the circle r = 0.2.
    let field = single_charge();
    let outcome = contour::trace(&field, 5.0, 1e-4, 1e-4);

    let TraceOutcome::Closed(c) = &outcome else {
        panic!("expected a closed contour, got {outcome:?}");
    };
    assert!(c.is_closed());
    assert_eq!(c.points().first(), c.points().last());
    assert!(c.len() > 100 && c.len() <= 502);
    for p in c.points() {
        assert!(approx_eq(p.coords.norm(), 0.2, 1e-3), "off circle: {p:?}");
    }
    let circumference = 2.0 * PI * 0.2;
    assert!(approx_eq(c.arc_length(), circumference, 0.02));
}

#[test]
fn every_point_sits_on_the_level() {
    let field = |p: &Point2<Real>| p.x * p.x + p.y * p.y;
    let params = TraceParams::default();
    let outcome = ContourTracer::new(params)
        .unwrap()
        .trace(&field, 0.25, Point2::new(0.0, 0.3));

    let c = outcome.contour().expect("circle should trace");
    assert!(c.is_closed());
    for p in c.points() {
        assert!((field(p) - 0.25).abs() <= params.tolerance);
    }
}

#[test]
fn free_function_matches_default_tracer() {
    let field = single_charge();
    let a = contour::trace(&field, 2.0, 0.1, 0.1);
    let b = ContourTracer::default().trace(&field, 2.0, Point2::new(0.1, 0.1));
    assert_eq!(a, b);
}

#[test]
fn constant_field_is_degenerate() {
    let field = |_: &Point2<Real>| -> Real { 1.0 };
    let outcome = contour::trace(&field, 0.5, 0.3, -0.2);
    assert_eq!(
        outcome,
        TraceOutcome::Failed(ContourFailure::DegenerateGradient {
            at: Point2::new(0.3, -0.2)
        })
    );
    assert_eq!(
        outcome.error(),
        Some(ExtractionError::DegenerateGradient { x: 0.3, y: -0.2 })
    );
}

#[test]
fn empty_charge_field_is_degenerate() {
    let field = ChargeField::default();
    assert!(contour::trace(&field, 0.1, 0.0, 0.0).is_failed());
}

#[test]
fn exhausted_budget_leaves_contour_open() {
    let field = single_charge();
    let tracer = ContourTracer::new(TraceParams::default().with_max_iterations(10)).unwrap();
    let outcome = tracer.trace(&field, 5.0, Point2::new(1e-4, 1e-4));

    let TraceOutcome::Open(c) = &outcome else {
        panic!("expected an open contour, got {outcome:?}");
    };
    assert_eq!(c.len(), 11);
    assert_ne!(c.points().first(), c.points().last());
    assert_eq!(
        outcome.error(),
        Some(ExtractionError::ConvergenceExceeded { iterations: 10 })
    );
}

#[test]
fn smaller_steps_give_denser_contours() {
    let field = single_charge();
    let coarse = contour::trace(&field, 5.0, 1e-4, 1e-4);
    let fine = ContourTracer::new(
        TraceParams::default()
            .with_step_size(0.005)
            .with_max_iterations(1000),
    )
    .unwrap()
    .trace(&field, 5.0, Point2::new(1e-4, 1e-4));

    assert!(coarse.is_closed() && fine.is_closed());
    assert!(fine.contour().unwrap().len() > coarse.contour().unwrap().len());
}

#[test]
fn dipole_family_circles_the_positive_charge() {
    let field = dipole(0.6);
    let traced = trace_around_charges(
        &field,
        &[0.5],
        &ContourTracer::default(),
        DEFAULT_SEED_OFFSET,
    );

    assert_eq!(traced.len(), 1);
    let c = &traced[0].contour;
    assert!(c.is_closed());
    assert!(approx_eq(traced[0].seed.x, -0.3 + DEFAULT_SEED_OFFSET, 1e-12));

    let n = (c.len() - 1) as Real;
    let centroid = c.points()[..c.len() - 1]
        .iter()
        .fold(Point2::origin().coords, |acc, p| acc + p.coords)
        / n;
    assert!(approx_eq(centroid.x, -0.3, 0.02));
    assert!(approx_eq(centroid.y, 0.0, 0.02));
    for p in c.points() {
        assert!(approx_eq(ScalarField2::value(&field, p), 0.5, 1e-3));
    }
}

#[test]
fn contours_convert_to_geo_and_buffers() {
    let field = single_charge();
    let c = contour::trace(&field, 5.0, 1e-4, 1e-4).into_contour().unwrap();
    let ls = c.to_line_string();
    assert!(ls.is_closed());
    assert_eq!(ls.0.len(), c.len());
    assert_eq!(c.flatten().len(), 2 * c.len());
}
