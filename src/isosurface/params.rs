//! Isosurface extraction parameters.

use crate::errors::ExtractionError;
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::marching_cubes::IntegrityPolicy;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for isosurface extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractParams {
    /// Number of voxels along each axis; the grid has `grid_resolution³` voxels.
    pub grid_resolution: usize,

    /// Region covered by the voxel grid.
    pub bounds: Aabb,

    /// Reaction to triangles referencing uncomputed crossings.
    pub integrity: IntegrityPolicy,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            grid_resolution: 20,
            bounds: Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0)),
            integrity: IntegrityPolicy::Skip,
        }
    }
}

impl ExtractParams {
    /// Strict parameters for tests and offline tooling.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            integrity: IntegrityPolicy::Fail,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_resolution(mut self, grid_resolution: usize) -> Self {
        self.grid_resolution = grid_resolution;
        self
    }

    #[must_use]
    pub const fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = bounds;
        self
    }

    /// Cube-shaped bounds `[min, max]` on every axis.
    #[must_use]
    pub fn with_cube_bounds(self, min: Real, max: Real) -> Self {
        self.with_bounds(Aabb::new(
            Point3::new(min, min, min),
            Point3::new(max, max, max),
        ))
    }

    #[must_use]
    pub const fn with_integrity(mut self, integrity: IntegrityPolicy) -> Self {
        self.integrity = integrity;
        self
    }

    /// Edge lengths of one voxel.
    pub fn voxel_size(&self) -> Vector3<Real> {
        (self.bounds.maxs - self.bounds.mins) / self.grid_resolution as Real
    }

    /// Length of one voxel's main diagonal.
    pub fn voxel_diagonal(&self) -> Real {
        self.voxel_size().norm()
    }

    /// Reject parameters that cannot describe a voxel grid.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.grid_resolution == 0 {
            return Err(ExtractionError::InvalidParams(
                "grid_resolution must be at least 1".to_string(),
            ));
        }
        let (mins, maxs) = (self.bounds.mins, self.bounds.maxs);
        let finite = mins.iter().chain(maxs.iter()).all(|c| c.is_finite());
        if !finite || (0..3).any(|axis| mins[axis] >= maxs[axis]) {
            return Err(ExtractionError::InvalidParams(format!(
                "bounds must be finite with min < max on every axis, got {mins} .. {maxs}"
            )));
        }
        Ok(())
    }
}
