//! Field samples on the corner lattice of a regular voxel grid.

use crate::errors::ExtractionError;
use crate::field::ScalarField3;
use crate::float_types::Real;
use crate::isosurface::params::ExtractParams;
use crate::marching_cubes::tables::CORNER_OFFSETS;
use crate::marching_cubes::{Cube, IntegrityPolicy, Triangle};
use nalgebra::{Point3, Vector3};

/// The `(n + 1)³` corner samples of an `n³` voxel grid.
///
/// Neighbouring voxels share the sample at a common corner, so the field is
/// evaluated once per lattice point and every level reuses the same samples.
#[derive(Debug, Clone)]
pub struct SampleLattice {
    resolution: usize,
    origin: Point3<Real>,
    spacing: Vector3<Real>,
    values: Vec<Real>,
}

impl SampleLattice {
    /// Allocate a lattice for `params` with every sample set to zero.
    pub fn zeroed(params: &ExtractParams) -> Self {
        let side = params.grid_resolution + 1;
        Self {
            resolution: params.grid_resolution,
            origin: params.bounds.mins,
            spacing: params.voxel_size(),
            values: vec![0.0; side * side * side],
        }
    }

    /// Sample `field` at every lattice point.
    pub fn sample<F>(field: &F, params: &ExtractParams) -> Self
    where
        F: ScalarField3 + ?Sized,
    {
        let mut lattice = Self::zeroed(params);
        let plane_len = lattice.side() * lattice.side();
        lattice.fill_with(|lattice, values| {
            for (k, plane) in values.chunks_mut(plane_len).enumerate() {
                lattice.fill_plane(field, k, plane);
            }
        });
        lattice
    }

    /// Hand the sample buffer to `fill` together with the lattice geometry.
    pub(crate) fn fill_with<G>(&mut self, fill: G)
    where
        G: FnOnce(&Self, &mut [Real]),
    {
        let mut values = std::mem::take(&mut self.values);
        fill(self, &mut values);
        self.values = values;
    }

    /// Fill one constant-`z` plane of samples.
    pub(crate) fn fill_plane<F>(&self, field: &F, k: usize, plane: &mut [Real])
    where
        F: ScalarField3 + ?Sized,
    {
        let side = self.side();
        for (i, value) in plane.iter_mut().enumerate() {
            let p = self.position(i % side, i / side, k);
            *value = field.value(&p);
        }
    }

    /// Number of voxels along each axis.
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of lattice points along each axis.
    pub const fn side(&self) -> usize {
        self.resolution + 1
    }

    #[inline]
    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let side = self.side();
        (k * side + j) * side + i
    }

    /// Position of lattice point `(i, j, k)`.
    #[inline]
    pub fn position(&self, i: usize, j: usize, k: usize) -> Point3<Real> {
        Point3::new(
            self.origin.x + i as Real * self.spacing.x,
            self.origin.y + j as Real * self.spacing.y,
            self.origin.z + k as Real * self.spacing.z,
        )
    }

    #[inline]
    pub fn value(&self, i: usize, j: usize, k: usize) -> Real {
        self.values[self.index(i, j, k)]
    }

    /// The voxel whose lowest corner is lattice point `(ix, iy, iz)`.
    pub fn cube(&self, ix: usize, iy: usize, iz: usize) -> Cube {
        let lattice_point = |[dx, dy, dz]: [u8; 3]| {
            (
                ix + usize::from(dx),
                iy + usize::from(dy),
                iz + usize::from(dz),
            )
        };
        Cube::new(
            CORNER_OFFSETS.map(|offset| {
                let (i, j, k) = lattice_point(offset);
                self.position(i, j, k)
            }),
            CORNER_OFFSETS.map(|offset| {
                let (i, j, k) = lattice_point(offset);
                self.value(i, j, k)
            }),
        )
    }

    /// Triangulate every voxel of the slab `iz` at `level`.
    pub fn polygonise_slab(
        &self,
        iz: usize,
        level: Real,
        policy: IntegrityPolicy,
        out: &mut Vec<Triangle>,
    ) -> Result<(), ExtractionError> {
        for iy in 0..self.resolution {
            for ix in 0..self.resolution {
                self.cube(ix, iy, iz).polygonise(level, policy, out)?;
            }
        }
        Ok(())
    }
}
