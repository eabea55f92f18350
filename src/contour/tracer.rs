//! Predictor-corrector march along a single level curve.

use crate::contour::newton::{Axis, Correction, correct_along};
use crate::contour::params::TraceParams;
use crate::contour::{Contour, ContourFailure, TraceOutcome};
use crate::errors::ExtractionError;
use crate::field::ScalarField2;
use crate::float_types::Real;
use nalgebra::Point2;
use tracing::debug;

/// `sign(0) = +1`, so a zero partial still produces a step.
#[inline]
fn sign(v: Real) -> Real {
    if v < 0.0 { -1.0 } else { 1.0 }
}

#[inline]
fn is_finite(p: &Point2<Real>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Follows `field == target` from a seed point with fixed-length steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContourTracer {
    params: TraceParams,
}

impl ContourTracer {
    pub fn new(params: TraceParams) -> Result<Self, ExtractionError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub const fn params(&self) -> &TraceParams {
        &self.params
    }

    fn correct<F>(&self, field: &F, target: Real, point: &mut Point2<Real>, axis: Axis) -> Correction
    where
        F: ScalarField2 + ?Sized,
    {
        correct_along(
            field,
            target,
            point,
            axis,
            self.params.tolerance,
            self.params.max_iterations,
        )
    }

    /// Trace the level curve `field == target` starting near `seed`.
    ///
    /// The seed is first projected onto the curve along `y`. Each step then moves
    /// `step_size` along whichever axis the curve is flatter in, and projects back
    /// along the other one. The trace closes once a step lands within half a step
    /// of the first point in both coordinates.
    pub fn trace<F>(&self, field: &F, target: Real, seed: Point2<Real>) -> TraceOutcome
    where
        F: ScalarField2 + ?Sized,
    {
        let s = self.params.step_size;
        let mut point = seed;

        let projection = self.correct(field, target, &mut point, Axis::Y);
        if !is_finite(&point) {
            debug!(?seed, level = target, "seed projection diverged");
            return TraceOutcome::Failed(ContourFailure::NonFinite { step: 0 });
        }
        if !projection.converged() {
            debug!(?seed, level = target, ?projection, "seed projection did not converge");
        }

        let start = point;
        let mut points = vec![start];

        for step in 1..=self.params.max_iterations {
            let g = field.gradient(&point);
            if g.x == 0.0 && g.y == 0.0 {
                debug!(step, x = point.x, y = point.y, "gradient vanished");
                return TraceOutcome::Failed(ContourFailure::DegenerateGradient { at: point });
            }

            // The tangent is (-dFdy, dFdx); step along its larger component.
            let corrected_axis = if g.y.abs() > g.x.abs() {
                point.x += s * -sign(g.y);
                point.y += s * g.x / g.y * sign(g.y);
                Axis::Y
            } else {
                point.y += s * sign(g.x);
                point.x += s * g.y / g.x * -sign(g.x);
                Axis::X
            };
            self.correct(field, target, &mut point, corrected_axis);

            if !is_finite(&point) {
                debug!(step, "trace reached a non-finite point");
                return TraceOutcome::Failed(ContourFailure::NonFinite { step });
            }
            points.push(point);

            if (point.x - start.x).abs() < s / 2.0 && (point.y - start.y).abs() < s / 2.0 {
                points.push(start);
                debug!(level = target, points = points.len(), "contour closed");
                return TraceOutcome::Closed(Contour::closed(points));
            }
        }

        debug!(
            level = target,
            points = points.len(),
            "contour left open after {} steps",
            self.params.max_iterations
        );
        TraceOutcome::Open(Contour::open(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.5), -1.0);
    }

    #[test]
    fn straight_line_runs_open() {
        // Level sets of x + y are lines that never return to the seed.
        let field = |p: &Point2<Real>| p.x + p.y;
        let tracer = ContourTracer::new(TraceParams::default().with_max_iterations(50)).unwrap();
        let outcome = tracer.trace(&field, 0.0, Point2::new(0.3, 0.0));

        let contour = outcome.contour().expect("line has a contour");
        assert!(!contour.is_closed());
        assert_eq!(contour.len(), 51);
        for p in contour.points() {
            assert!((p.x + p.y).abs() < 1e-4);
        }
    }

    #[test]
    fn rejects_bad_params() {
        assert!(ContourTracer::new(TraceParams::default().with_step_size(0.0)).is_err());
    }
}
