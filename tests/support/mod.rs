//! Test support library
//! Provides fields and comparison helpers shared by the integration tests.
#![allow(dead_code)]

use equipotential::field::{Charge, ChargeField};
use equipotential::float_types::Real;
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A unit charge at the origin with unit scale, so `V(r) = 1 / r`.
pub fn single_charge() -> ChargeField {
    ChargeField::new(vec![Charge::planar(0.0, 0.0, 1.0)]).with_scale(1.0)
}

/// Charges `+1` and `-1` on the x axis at `∓separation / 2`, default scale.
pub fn dipole(separation: Real) -> ChargeField {
    ChargeField::new(vec![
        Charge::planar(-separation / 2.0, 0.0, 1.0),
        Charge::planar(separation / 2.0, 0.0, -1.0),
    ])
}

/// Signed distance to a sphere of `radius` centred at the origin.
pub fn sphere_sdf(radius: Real) -> impl Fn(&Point3<Real>) -> Real + Sync {
    move |p: &Point3<Real>| p.coords.norm() - radius
}
