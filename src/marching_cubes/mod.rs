//! Marching cubes building blocks: case tables, cube classification and edge interpolation.
//!
//! Ambiguous configurations (faces with alternating corner signs) are
//! triangulated exactly as the classic table dictates; no topological
//! disambiguation is attempted.

pub mod classify;
pub mod cube;
pub mod interpolate;
pub mod tables;

pub use classify::{
    case_table_is_valid, classify, lookup_edges, lookup_triangle_edges, validate_case_table,
};
pub use cube::{Cube, IntegrityPolicy, Triangle};
pub use interpolate::interpolate;
