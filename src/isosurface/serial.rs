//! Serial implementation of isosurface extraction

use crate::errors::ExtractionError;
use crate::field::ScalarField3;
use crate::float_types::Real;
use crate::isosurface::lattice::SampleLattice;
use crate::isosurface::mesh::{LevelColor, ShellMesh};
use crate::isosurface::params::ExtractParams;
use crate::isosurface::traits::ExtractOps;
use tracing::debug;

/// Serial implementation of isosurface extraction
pub struct SerialExtractOps;

impl SerialExtractOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialExtractOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOps for SerialExtractOps {
    fn extract<F>(
        &self,
        field: &F,
        levels: &[Real],
        params: &ExtractParams,
        color: Option<&(dyn LevelColor + Sync)>,
    ) -> Result<ShellMesh, ExtractionError>
    where
        F: ScalarField3 + Sync + ?Sized,
    {
        super::check_preconditions(params)?;

        let lattice = SampleLattice::sample(field, params);
        let mut mesh = ShellMesh::new();
        let mut triangles = Vec::new();

        for &level in levels {
            triangles.clear();
            for iz in 0..lattice.resolution() {
                lattice.polygonise_slab(iz, level, params.integrity, &mut triangles)?;
            }
            debug!(level, triangles = triangles.len(), "extracted shell");
            mesh.push_shell(level, &triangles, color.map(|c| c.color(level)));
        }

        Ok(mesh)
    }
}
