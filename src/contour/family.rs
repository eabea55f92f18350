//! Families of equipotential lines seeded next to every charge.

use crate::contour::{Contour, ContourTracer, TraceOutcome};
use crate::field::{ChargeField, ScalarField2};
use crate::float_types::Real;
use nalgebra::{Point2, Vector2};
use tracing::{debug, warn};

/// Offset applied to a charge position on both axes to obtain a seed.
pub const DEFAULT_SEED_OFFSET: Real = 1e-4;

/// A contour together with the level and seed it was traced from.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedContour {
    pub level: Real,
    pub seed: Point2<Real>,
    pub contour: Contour,
}

/// Trace every level in `levels` from a seed next to every charge of `field`.
///
/// Seeds sit at `charge + (seed_offset, seed_offset)` on the `z = 0` plane.
/// Failed traces are dropped, as are traces whose seed could not be projected
/// onto its level (a level of the wrong sign for a lone charge, for instance).
/// Open contours are kept and reported.
pub fn trace_around_charges(
    field: &ChargeField,
    levels: &[Real],
    tracer: &ContourTracer,
    seed_offset: Real,
) -> Vec<TracedContour> {
    let tolerance = tracer.params().tolerance;
    let mut traced = Vec::new();

    for charge in field.charges() {
        let seed = charge.position.xy() + Vector2::repeat(seed_offset);
        for &level in levels {
            let contour = match tracer.trace(field, level, seed) {
                TraceOutcome::Closed(contour) | TraceOutcome::Open(contour) => contour,
                TraceOutcome::Failed(failure) => {
                    debug!(level, ?seed, ?failure, "trace failed");
                    continue;
                },
            };
            let on_level = contour
                .points()
                .first()
                .is_some_and(|p| (ScalarField2::value(field, p) - level).abs() <= tolerance);
            if !on_level {
                debug!(level, ?seed, "level unreachable from seed");
                continue;
            }
            if !contour.is_closed() {
                warn!(level, ?seed, points = contour.len(), "contour did not close");
            }
            traced.push(TracedContour {
                level,
                seed,
                contour,
            });
        }
    }
    traced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::TraceParams;
    use crate::field::Charge;

    #[test]
    fn empty_field_has_no_family() {
        let field = ChargeField::default();
        let traced = trace_around_charges(&field, &[0.1], &ContourTracer::default(), 1e-4);
        assert!(traced.is_empty());
    }

    #[test]
    fn lone_charge_traces_only_its_own_sign() {
        let field = ChargeField::new(vec![Charge::planar(0.0, 0.0, 1.0)]).with_scale(1.0);
        let tracer = ContourTracer::new(TraceParams::default().with_max_iterations(1000)).unwrap();
        let traced = trace_around_charges(&field, &[-5.0, 5.0], &tracer, DEFAULT_SEED_OFFSET);

        assert_eq!(traced.len(), 1);
        assert_eq!(traced[0].level, 5.0);
        assert!(traced[0].contour.is_closed());
    }
}
