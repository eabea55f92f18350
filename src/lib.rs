//! Level-set extraction for scalar fields, built around point-charge potentials:
//! **2D contour tracing** by predictor step plus Newton correction, and
//! **3D isosurface ("shell") extraction** by [marching cubes](https://paulbourke.net/geometry/polygonise/).
//!
//! Fields are anything implementing [`field::ScalarField2`] or [`field::ScalarField3`],
//! including plain closures. [`field::ChargeField`] implements both.
//!
//! ```
//! use equipotential::contour::{self, TraceOutcome};
//! use equipotential::field::{Charge, ChargeField};
//!
//! let field = ChargeField::new(vec![Charge::planar(0.0, 0.0, 1.0)]).with_scale(1.0);
//! let outcome = contour::trace(&field, 5.0, 1e-4, 1e-4);
//! assert!(matches!(outcome, TraceOutcome::Closed(_)));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample the lattice and polygonise slabs in parallel
//! - **serde**: `Serialize`/`Deserialize` for charges and parameters
//! - **wasm**: `wasm-bindgen` wrappers for fields, contours and shells
//! - **demo**: build the `equipotential` demo binary with `tracing-subscriber`

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod contour;
pub mod errors;
pub mod field;
pub mod float_types;
pub mod isosurface;
pub mod levels;
pub mod marching_cubes;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use contour::{Contour, ContourTracer, TraceOutcome, TraceParams};
pub use errors::ExtractionError;
pub use field::{Charge, ChargeField, ScalarField2, ScalarField3};
pub use float_types::Real;
pub use isosurface::{ExtractParams, IsosurfaceExtractor, ShellMesh};
