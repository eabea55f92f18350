//! Isosurface ("shell") extraction over a regular voxel grid
//!
//! This module provides marching-cubes extraction with dependency inversion,
//! allowing for different algorithm implementations (serial/parallel).

pub mod lattice;
pub mod mesh;
pub mod params;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use crate::marching_cubes::IntegrityPolicy;
pub use lattice::SampleLattice;
pub use mesh::{Color, LevelColor, Shell, ShellMesh, SignedLevelColor};
pub use params::ExtractParams;
pub use traits::ExtractOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialExtractOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExtractOps;

use crate::errors::ExtractionError;
use crate::field::ScalarField3;
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::marching_cubes::{case_table_is_valid, validate_case_table};
use tracing::info;

/// Parameter and case-table checks shared by every [`ExtractOps`] implementation.
fn check_preconditions(params: &ExtractParams) -> Result<(), ExtractionError> {
    params.validate()?;
    if params.integrity == IntegrityPolicy::Fail && !case_table_is_valid() {
        validate_case_table()?;
    }
    Ok(())
}

/// Extracts shells of a scalar field with fixed parameters and an optional palette.
///
/// # Example
/// ```
/// # use equipotential::isosurface::{IsosurfaceExtractor, SignedLevelColor};
/// # use equipotential::field::{Charge, ChargeField};
/// let field = ChargeField::new(vec![Charge::planar(0.0, 0.0, 1.0)]).with_scale(0.1);
/// let extractor = IsosurfaceExtractor::default().with_color(SignedLevelColor::default());
/// let mesh = extractor.extract(&field, &[0.2, 0.4]).unwrap();
/// assert!(mesh.triangle_count() > 0);
/// assert_eq!(mesh.colors.len(), mesh.positions.len());
/// ```
#[derive(Default)]
pub struct IsosurfaceExtractor {
    params: ExtractParams,
    color: Option<Box<dyn LevelColor + Send + Sync>>,
}

impl IsosurfaceExtractor {
    pub fn new(params: ExtractParams) -> Self {
        Self {
            params,
            color: None,
        }
    }

    /// Color every vertex by its shell's level.
    #[must_use]
    pub fn with_color<C>(mut self, color: C) -> Self
    where
        C: LevelColor + Send + Sync + 'static,
    {
        self.color = Some(Box::new(color));
        self
    }

    pub const fn params(&self) -> &ExtractParams {
        &self.params
    }

    /// Extract one shell per level and concatenate them.
    pub fn extract<F>(&self, field: &F, levels: &[Real]) -> Result<ShellMesh, ExtractionError>
    where
        F: ScalarField3 + Sync + ?Sized,
    {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialExtractOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelExtractOps::new();

        let color = self
            .color
            .as_deref()
            .map(|c| c as &(dyn LevelColor + Sync));
        let mesh = ops.extract(field, levels, &self.params, color)?;

        info!(
            shells = levels.len(),
            triangles = mesh.triangle_count(),
            resolution = self.params.grid_resolution,
            "isosurface extraction complete"
        );
        Ok(mesh)
    }
}

/// Extract the shells of `field` at `threshold_levels` over `domain_bounds`,
/// using a `grid_resolution³` voxel grid and no coloring.
pub fn extract<F>(
    field: &F,
    threshold_levels: &[Real],
    grid_resolution: usize,
    domain_bounds: Aabb,
) -> Result<ShellMesh, ExtractionError>
where
    F: ScalarField3 + Sync + ?Sized,
{
    let params = ExtractParams::default()
        .with_resolution(grid_resolution)
        .with_bounds(domain_bounds);
    IsosurfaceExtractor::new(params).extract(field, threshold_levels)
}

/// Like [`extract`], with full parameters and an optional level palette.
pub fn extract_with<F>(
    field: &F,
    threshold_levels: &[Real],
    params: &ExtractParams,
    color: Option<&(dyn LevelColor + Sync)>,
) -> Result<ShellMesh, ExtractionError>
where
    F: ScalarField3 + Sync + ?Sized,
{
    #[cfg(not(feature = "parallel"))]
    let ops = SerialExtractOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelExtractOps::new();

    ops.extract(field, threshold_levels, params, color)
}
