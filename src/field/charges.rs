//! Electrostatic potential of a set of point charges.

use crate::field::{ScalarField2, ScalarField3};
use crate::float_types::{DEFAULT_MIN_DISTANCE, Real};
use nalgebra::{Point2, Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point charge. Planar fields read only `position.x` and `position.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Charge {
    pub position: Point3<Real>,
    pub magnitude: Real,
}

impl Charge {
    pub const fn new(position: Point3<Real>, magnitude: Real) -> Self {
        Self {
            position,
            magnitude,
        }
    }

    /// A charge lying in the `z = 0` plane.
    pub const fn planar(x: Real, y: Real, magnitude: Real) -> Self {
        Self::new(Point3::new(x, y, 0.0), magnitude)
    }
}

/// **Mathematical Foundation: Superposed Coulomb Potentials**
///
/// For charges `qᵢ` at `cᵢ` the potential at `p` is
/// ```text
/// V(p) = k · Σᵢ qᵢ / dᵢ,    dᵢ = max(|p - cᵢ|, d_min)
/// ```
/// and its gradient is
/// ```text
/// ∇V(p) = -k · Σᵢ qᵢ (p - cᵢ) / dᵢ³
/// ```
/// The clamp `d_min` keeps both finite at the charge locations themselves.
///
/// The field only reads its charges. Callers that animate charges mutate them
/// between extraction calls through [`ChargeField::charges_mut`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargeField {
    charges: Vec<Charge>,
    /// Coulomb-like constant `k` multiplying every contribution.
    pub scale: Real,
    /// Separation below which distances are clamped.
    pub min_distance: Real,
}

impl Default for ChargeField {
    fn default() -> Self {
        Self {
            charges: Vec::new(),
            scale: 0.04,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl ChargeField {
    pub fn new(charges: Vec<Charge>) -> Self {
        Self {
            charges,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: Real) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_min_distance(mut self, min_distance: Real) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn charges_mut(&mut self) -> &mut Vec<Charge> {
        &mut self.charges
    }

    pub fn push(&mut self, charge: Charge) {
        self.charges.push(charge);
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    #[inline]
    fn clamped_distance(&self, offset: &Vector3<Real>) -> Real {
        offset.norm().max(self.min_distance)
    }

    /// Potential at a point in space.
    pub fn potential(&self, p: &Point3<Real>) -> Real {
        self.charges
            .iter()
            .map(|charge| {
                let d = self.clamped_distance(&(p - charge.position));
                charge.magnitude / d
            })
            .sum::<Real>()
            * self.scale
    }

    /// Analytic gradient of [`ChargeField::potential`].
    ///
    /// Inside `min_distance` of a charge its potential is constant, so that charge
    /// contributes nothing there.
    pub fn potential_gradient(&self, p: &Point3<Real>) -> Vector3<Real> {
        self.charges
            .iter()
            .fold(Vector3::zeros(), |acc, charge| {
                let offset = p - charge.position;
                let d = offset.norm();
                if d < self.min_distance {
                    return acc;
                }
                acc - offset * (charge.magnitude / (d * d * d))
            })
            * self.scale
    }
}

impl ScalarField3 for ChargeField {
    fn value(&self, p: &Point3<Real>) -> Real {
        self.potential(p)
    }

    fn gradient(&self, p: &Point3<Real>) -> Vector3<Real> {
        self.potential_gradient(p)
    }
}

impl ScalarField2 for ChargeField {
    fn value(&self, p: &Point2<Real>) -> Real {
        self.potential(&Point3::new(p.x, p.y, 0.0))
    }

    fn gradient(&self, p: &Point2<Real>) -> Vector2<Real> {
        self.potential_gradient(&Point3::new(p.x, p.y, 0.0)).xy()
    }
}
