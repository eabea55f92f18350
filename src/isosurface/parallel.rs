//! Parallel implementation of isosurface extraction

use crate::errors::ExtractionError;
use crate::field::ScalarField3;
use crate::float_types::Real;
use crate::isosurface::lattice::SampleLattice;
use crate::isosurface::mesh::{LevelColor, ShellMesh};
use crate::isosurface::params::ExtractParams;
use crate::isosurface::traits::ExtractOps;
use crate::marching_cubes::Triangle;
use rayon::prelude::*;
use tracing::debug;

/// Parallel implementation of isosurface extraction.
///
/// Lattice planes are sampled and voxel slabs polygonised on rayon's pool.
/// Slab results are concatenated in slab order, so the output matches
/// [`SerialExtractOps`](super::serial::SerialExtractOps) triangle for triangle.
pub struct ParallelExtractOps;

impl ParallelExtractOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelExtractOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOps for ParallelExtractOps {
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

        let mut lattice = SampleLattice::zeroed(params);
        let plane_len = lattice.side() * lattice.side();
        lattice.fill_with(|lattice, values| {
            values
                .par_chunks_mut(plane_len)
                .enumerate()
                .for_each(|(k, plane)| lattice.fill_plane(field, k, plane));
        });

        let mut mesh = ShellMesh::new();
        for &level in levels {
            let slabs: Vec<Vec<Triangle>> = (0..lattice.resolution())
                .into_par_iter()
                .map(|iz| {
                    let mut slab = Vec::new();
                    lattice
                        .polygonise_slab(iz, level, params.integrity, &mut slab)
                        .map(|()| slab)
                })
                .collect::<Result<_, _>>()?;

            let triangles: Vec<Triangle> = slabs.into_iter().flatten().collect();
            debug!(level, triangles = triangles.len(), "extracted shell");
            mesh.push_shell(level, &triangles, color.map(|c| c.color(level)));
        }

        Ok(mesh)
    }
}
