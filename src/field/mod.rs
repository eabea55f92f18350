//! Scalar fields sampled by the extraction engine.
//!
//! The tracer needs a 2D field with usable partial derivatives, the extractor
//! needs a 3D field it can sample at lattice points. Plain closures are fields;
//! their gradient falls back to a central finite difference.

pub mod charges;

pub use charges::{Charge, ChargeField};

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Half-width of the central difference used when no analytic gradient exists.
#[cfg(feature = "f64")]
pub const FINITE_DIFFERENCE_STEP: Real = 1e-6;
/// Half-width of the central difference used when no analytic gradient exists.
#[cfg(feature = "f32")]
pub const FINITE_DIFFERENCE_STEP: Real = 1e-3;

/// A scalar field over the plane.
///
/// Implementations must be deterministic and free of side effects for the
/// duration of one trace.
pub trait ScalarField2 {
    /// Field value at `p`.
    fn value(&self, p: &Point2<Real>) -> Real;

    /// Partial derivatives `(dF/dx, dF/dy)` at `p`.
    fn gradient(&self, p: &Point2<Real>) -> Vector2<Real> {
        let h = FINITE_DIFFERENCE_STEP;
        let dx = Vector2::new(h, 0.0);
        let dy = Vector2::new(0.0, h);
        Vector2::new(
            (self.value(&(p + dx)) - self.value(&(p - dx))) / (2.0 * h),
            (self.value(&(p + dy)) - self.value(&(p - dy))) / (2.0 * h),
        )
    }
}

/// A scalar field over space.
pub trait ScalarField3 {
    /// Field value at `p`.
    fn value(&self, p: &Point3<Real>) -> Real;

    /// Gradient at `p`.
    fn gradient(&self, p: &Point3<Real>) -> Vector3<Real> {
        let h = FINITE_DIFFERENCE_STEP;
        let partial = |axis: Vector3<Real>| {
            (self.value(&(p + axis * h)) - self.value(&(p - axis * h))) / (2.0 * h)
        };
        Vector3::new(
            partial(Vector3::x()),
            partial(Vector3::y()),
            partial(Vector3::z()),
        )
    }
}

impl<F> ScalarField2 for F
where
    F: Fn(&Point2<Real>) -> Real,
{
    #[inline]
    fn value(&self, p: &Point2<Real>) -> Real {
        self(p)
    }
}

impl<F> ScalarField3 for F
where
    F: Fn(&Point3<Real>) -> Real,
{
    #[inline]
    fn value(&self, p: &Point3<Real>) -> Real {
        self(p)
    }
}

/// A field given as a value function paired with its analytic gradient.
///
/// ```
/// # use equipotential::field::{ScalarField2, WithGradient};
/// # use equipotential::float_types::Real;
/// # use nalgebra::{Point2, Vector2};
/// let paraboloid = WithGradient::new(
///     |p: &Point2<Real>| p.coords.norm_squared(),
///     |p: &Point2<Real>| 2.0 * p.coords,
/// );
/// assert_eq!(paraboloid.gradient(&Point2::new(1.0, 0.0)), Vector2::new(2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithGradient<V, G> {
    value: V,
    gradient: G,
}

impl<V, G> WithGradient<V, G> {
    pub const fn new(value: V, gradient: G) -> Self {
        Self { value, gradient }
    }
}

impl<V, G> ScalarField2 for WithGradient<V, G>
where
    V: Fn(&Point2<Real>) -> Real,
    G: Fn(&Point2<Real>) -> Vector2<Real>,
{
    fn value(&self, p: &Point2<Real>) -> Real {
        (self.value)(p)
    }

    fn gradient(&self, p: &Point2<Real>) -> Vector2<Real> {
        (self.gradient)(p)
    }
}

impl<V, G> ScalarField3 for WithGradient<V, G>
where
    V: Fn(&Point3<Real>) -> Real,
    G: Fn(&Point3<Real>) -> Vector3<Real>,
{
    fn value(&self, p: &Point3<Real>) -> Real {
        (self.value)(p)
    }

    fn gradient(&self, p: &Point3<Real>) -> Vector3<Real> {
        (self.gradient)(p)
    }
}
