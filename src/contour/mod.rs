//! 2D level-curve tracing by predictor step plus Newton correction
//!
//! A trace follows one curve `F(x, y) = target` from a seed point and returns a
//! [`TraceOutcome`]: a closed loop, an open polyline when the step budget ran out,
//! or a typed failure when no curve could be followed from the seed.

pub mod family;
pub mod newton;
pub mod params;
pub mod tracer;

pub use family::{DEFAULT_SEED_OFFSET, TracedContour, trace_around_charges};
pub use newton::{Axis, Correction, correct_along};
pub use params::TraceParams;
pub use tracer::ContourTracer;

use crate::errors::ExtractionError;
use crate::field::ScalarField2;
use crate::float_types::Real;
use geo::{Coord, LineString};
use nalgebra::Point2;

/// Ordered points along a level curve.
///
/// A closed contour repeats its first point at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point2<Real>>,
    closed: bool,
}

impl Contour {
    pub(crate) fn closed(points: Vec<Point2<Real>>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub(crate) fn open(points: Vec<Point2<Real>>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Polyline length.
    pub fn arc_length(&self) -> Real {
        self.points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .sum()
    }

    /// Convert to a `geo` line string. A closed contour yields a closed ring.
    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }

    /// Points as `x, y` floats, ready for a line buffer.
    pub fn flatten(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32])
            .collect()
    }
}

/// Why no contour could be produced from a seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContourFailure {
    /// Both partial derivatives were exactly zero at `at`.
    DegenerateGradient { at: Point2<Real> },
    /// A coordinate became non-finite at marching step `step` (0 is the seed projection).
    NonFinite { step: usize },
}

impl From<ContourFailure> for ExtractionError {
    fn from(failure: ContourFailure) -> Self {
        match failure {
            ContourFailure::DegenerateGradient { at } => {
                ExtractionError::DegenerateGradient { x: at.x, y: at.y }
            },
            ContourFailure::NonFinite { step } => ExtractionError::NonFinite { step },
        }
    }
}

/// Result of a single trace.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome {
    /// Returned to the start point; the closing point is appended.
    Closed(Contour),
    /// Step budget exhausted before closing.
    Open(Contour),
    Failed(ContourFailure),
}

impl TraceOutcome {
    pub fn is_closed(&self) -> bool {
        matches!(self, TraceOutcome::Closed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TraceOutcome::Failed(_))
    }

    pub fn contour(&self) -> Option<&Contour> {
        match self {
            TraceOutcome::Closed(c) | TraceOutcome::Open(c) => Some(c),
            TraceOutcome::Failed(_) => None,
        }
    }

    pub fn into_contour(self) -> Option<Contour> {
        match self {
            TraceOutcome::Closed(c) | TraceOutcome::Open(c) => Some(c),
            TraceOutcome::Failed(_) => None,
        }
    }

    /// The outcome as an error, if it is not a closed loop.
    ///
    /// An open contour reports [`ExtractionError::ConvergenceExceeded`] with the
    /// number of marching steps taken.
    pub fn error(&self) -> Option<ExtractionError> {
        match self {
            TraceOutcome::Closed(_) => None,
            TraceOutcome::Open(c) => Some(ExtractionError::ConvergenceExceeded {
                iterations: c.len().saturating_sub(1),
            }),
            TraceOutcome::Failed(failure) => Some((*failure).into()),
        }
    }
}

/// Trace `field == target_level` from `(seed_x, seed_y)` with default [`TraceParams`].
pub fn trace<F>(field: &F, target_level: Real, seed_x: Real, seed_y: Real) -> TraceOutcome
where
    F: ScalarField2 + ?Sized,
{
    ContourTracer::default().trace(field, target_level, Point2::new(seed_x, seed_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Contour {
        Contour::closed(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ])
    }

    #[test]
    fn line_string_keeps_the_ring_closed() {
        let ls = square().to_line_string();
        assert_eq!(ls.0.len(), 5);
        assert!(ls.is_closed());
    }

    #[test]
    fn flatten_interleaves_coordinates() {
        let flat = square().flatten();
        assert_eq!(flat.len(), 10);
        assert_eq!(&flat[2..4], &[1.0, 0.0]);
        assert_eq!(square().arc_length(), 4.0);
    }

    #[test]
    fn open_outcome_reports_exhaustion() {
        let open = TraceOutcome::Open(Contour::open(vec![Point2::origin(); 4]));
        assert_eq!(
            open.error(),
            Some(ExtractionError::ConvergenceExceeded { iterations: 3 })
        );
        assert!(TraceOutcome::Closed(square()).error().is_none());

        let failed = TraceOutcome::Failed(ContourFailure::DegenerateGradient {
            at: Point2::new(1.0, 2.0),
        });
        assert_eq!(
            failed.error(),
            Some(ExtractionError::DegenerateGradient { x: 1.0, y: 2.0 })
        );
        assert!(failed.contour().is_none());
    }
}
