//! Traits defining isosurface extraction for dependency inversion

use crate::errors::ExtractionError;
use crate::field::ScalarField3;
use crate::float_types::Real;
use crate::isosurface::mesh::{LevelColor, ShellMesh};
use crate::isosurface::params::ExtractParams;

/// Core isosurface extraction operations trait
pub trait ExtractOps {
    /// Triangulate the level sets of `field` at every level in `levels`.
    ///
    /// Shells are appended in the order of `levels`. When `color` is given,
    /// every vertex of a shell carries the color of its level.
    fn extract<F>(
        &self,
        field: &F,
        levels: &[Real],
        params: &ExtractParams,
        color: Option<&(dyn LevelColor + Sync)>,
    ) -> Result<ShellMesh, ExtractionError>
    where
        F: ScalarField3 + Sync + ?Sized;
}
