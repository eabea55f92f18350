// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Machine-level epsilon for the active `Real`, used for degenerate-geometry checks.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-6;
/// Machine-level epsilon for the active `Real`, used for degenerate-geometry checks.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-10;

/// Fixed predictor step length of the contour tracer.
pub const DEFAULT_STEP_SIZE: Real = 0.01;

/// Iteration cap shared by the Newton corrections and the marching loop.
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Smallest distance to a charge used when evaluating the potential.
pub const DEFAULT_MIN_DISTANCE: Real = 1e-4;

/// Lazily-initialized Newton-Raphson tolerance used across the crate.
/// Defaults to `1e-4`, but can be overridden:
///  1) **Build-time**: set env var `EQUIPOTENTIAL_TOLERANCE` (e.g. `EQUIPOTENTIAL_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-4
}

/// Returns the current tolerance value.
/// If not set yet, it tries `EQUIPOTENTIAL_TOLERANCE` (parsed as the active `Real`) and
/// falls back to the default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("EQUIPOTENTIAL_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `equipotential::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
