//! One-dimensional Newton-Raphson projection onto a level set.

use crate::field::ScalarField2;
use crate::float_types::Real;
use nalgebra::Point2;

/// Coordinate axis of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// How a Newton correction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// `|field - target| <= tolerance` after this many updates.
    Converged { iterations: usize },
    /// The partial derivative along the axis was exactly zero; the point was left where it was.
    FlatDerivative,
    /// The iteration cap was reached without meeting the tolerance.
    Exhausted,
    /// The coordinate became non-finite.
    Diverged,
}

impl Correction {
    pub const fn converged(self) -> bool {
        matches!(self, Correction::Converged { .. })
    }
}

/// Move `point` along `axis` only until `field(point)` is within `tolerance` of `target`.
///
/// Each update is `x ← x - (F(x) - target) / ∂F/∂x` on the chosen coordinate,
/// the other coordinate is held fixed.
pub fn correct_along<F>(
    field: &F,
    target: Real,
    point: &mut Point2<Real>,
    axis: Axis,
    tolerance: Real,
    max_iterations: usize,
) -> Correction
where
    F: ScalarField2 + ?Sized,
{
    let i = axis.index();
    for iteration in 0..max_iterations {
        let residual = field.value(point) - target;
        if residual.abs() <= tolerance {
            return Correction::Converged {
                iterations: iteration,
            };
        }
        let slope = field.gradient(point)[i];
        if slope == 0.0 {
            return Correction::FlatDerivative;
        }
        point[i] -= residual / slope;
        if !point[i].is_finite() {
            return Correction::Diverged;
        }
    }

    if (field.value(point) - target).abs() <= tolerance {
        Correction::Converged {
            iterations: max_iterations,
        }
    } else {
        Correction::Exhausted
    }
}
