//! A single voxel and its triangulation.

use crate::errors::ExtractionError;
use crate::float_types::Real;
use crate::marching_cubes::classify::{classify, lookup_edges, lookup_triangle_edges};
use crate::marching_cubes::interpolate::interpolate;
use crate::marching_cubes::tables::{CORNER_OFFSETS, EDGE_CORNERS};
use nalgebra::{Point3, Vector3};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a triangle references an edge that has no crossing point.
///
/// That can only happen with a corrupted case table, so interactive callers
/// usually keep rendering whatever is left while tests want a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegrityPolicy {
    /// Drop the offending triangle and log a warning.
    #[default]
    Skip,
    /// Abort the extraction with [`ExtractionError::TableIntegrityViolation`].
    Fail,
}

/// One triangle as three positions.
pub type Triangle = [Point3<Real>; 3];

/// Eight corner positions with the field sampled at each, in [`CORNER_OFFSETS`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub corners: [Point3<Real>; 8],
    pub values: [Real; 8],
}

impl Cube {
    pub const fn new(corners: [Point3<Real>; 8], values: [Real; 8]) -> Self {
        Self { corners, values }
    }

    /// Build an axis-aligned cube at `origin` with edge lengths `size`, sampling `field`.
    pub fn sample<F>(origin: &Point3<Real>, size: &Vector3<Real>, field: F) -> Self
    where
        F: Fn(&Point3<Real>) -> Real,
    {
        let corners = CORNER_OFFSETS.map(|[dx, dy, dz]| {
            Point3::new(
                origin.x + Real::from(dx) * size.x,
                origin.y + Real::from(dy) * size.y,
                origin.z + Real::from(dz) * size.z,
            )
        });
        let values = corners.map(|p| field(&p));
        Self { corners, values }
    }

    #[inline]
    pub fn classify(&self, threshold: Real) -> u8 {
        classify(&self.values, threshold)
    }

    /// Crossing points on every edge flagged in `edge_mask`; unflagged edges stay `None`.
    pub fn crossings(&self, threshold: Real, edge_mask: u16) -> [Option<Point3<Real>>; 12] {
        let mut crossings = [None; 12];
        for (edge, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
            if edge_mask & (1 << edge) != 0 {
                crossings[edge] = Some(interpolate(
                    threshold,
                    &self.corners[a],
                    self.values[a],
                    &self.corners[b],
                    self.values[b],
                ));
            }
        }
        crossings
    }

    /// Append the triangles of this cube at `threshold` to `out`.
    ///
    /// Returns the number of triangles appended.
    pub fn polygonise(
        &self,
        threshold: Real,
        policy: IntegrityPolicy,
        out: &mut Vec<Triangle>,
    ) -> Result<usize, ExtractionError> {
        let case_index = self.classify(threshold);
        self.polygonise_case(
            threshold,
            case_index,
            lookup_edges(case_index),
            lookup_triangle_edges(case_index),
            policy,
            out,
        )
    }

    /// Triangulate against an explicit mask/edge-list pair instead of the static table.
    pub(crate) fn polygonise_case(
        &self,
        threshold: Real,
        case_index: u8,
        edge_mask: u16,
        triangle_edges: &[i8],
        policy: IntegrityPolicy,
        out: &mut Vec<Triangle>,
    ) -> Result<usize, ExtractionError> {
        if edge_mask == 0 {
            return Ok(0);
        }

        let crossings = self.crossings(threshold, edge_mask);
        let before = out.len();

        for tri in triangle_edges.chunks_exact(3) {
            let lookup = |edge: i8| {
                usize::try_from(edge)
                    .ok()
                    .and_then(|e| crossings.get(e).copied().flatten())
                    .ok_or(edge)
            };

            match (lookup(tri[0]), lookup(tri[1]), lookup(tri[2])) {
                (Ok(a), Ok(b), Ok(c)) => out.push([a, b, c]),
                (Err(edge), _, _) | (_, Err(edge), _) | (_, _, Err(edge)) => {
                    let violation = ExtractionError::TableIntegrityViolation {
                        case_index,
                        edge: edge as u8,
                    };
                    match policy {
                        IntegrityPolicy::Fail => return Err(violation),
                        IntegrityPolicy::Skip => {
                            warn!(%violation, "skipping triangle");
                        },
                    }
                },
            }
        }

        Ok(out.len() - before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube(values: [Real; 8]) -> Cube {
        let corners = CORNER_OFFSETS
            .map(|[x, y, z]| Point3::new(Real::from(x), Real::from(y), Real::from(z)));
        Cube::new(corners, values)
    }

    #[test]
    fn uniform_cubes_emit_nothing() {
        let mut out = Vec::new();
        let inside = unit_cube([-1.0; 8]);
        let outside = unit_cube([1.0; 8]);
        assert_eq!(inside.polygonise(0.0, IntegrityPolicy::Fail, &mut out), Ok(0));
        assert_eq!(outside.polygonise(0.0, IntegrityPolicy::Fail, &mut out), Ok(0));
        assert!(out.is_empty());
    }

    #[test]
    fn single_low_corner_cuts_its_three_edges_midway() {
        let mut values = [1.0; 8];
        values[3] = -1.0;
        let cube = unit_cube(values);
        let mut out = Vec::new();
        assert_eq!(cube.polygonise(0.0, IntegrityPolicy::Fail, &mut out), Ok(1));

        // Corner 3 sits at the origin; its edges run along +x, +y and +z.
        for p in out[0] {
            let coords = [p.x, p.y, p.z];
            assert_eq!(coords.iter().filter(|&&c| c == 0.5).count(), 1);
            assert_eq!(coords.iter().filter(|&&c| c == 0.0).count(), 2);
        }
    }

    #[test]
    fn corrupted_edge_list_is_reported_or_skipped() {
        let mut values = [1.0; 8];
        values[0] = -1.0;
        let cube = unit_cube(values);
        let case_index = cube.classify(0.0);
        assert_eq!(case_index, 1);

        // Edge 5 is not crossed in case 1.
        let corrupted = [0, 8, 3, 0, 5, 3];
        let mask = lookup_edges(case_index);

        let mut out = Vec::new();
        let strict =
            cube.polygonise_case(0.0, case_index, mask, &corrupted, IntegrityPolicy::Fail, &mut out);
        assert_eq!(
            strict,
            Err(ExtractionError::TableIntegrityViolation {
                case_index: 1,
                edge: 5
            })
        );

        out.clear();
        let lenient =
            cube.polygonise_case(0.0, case_index, mask, &corrupted, IntegrityPolicy::Skip, &mut out);
        assert_eq!(lenient, Ok(1));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn sample_places_corners_on_the_voxel() {
        let cube = Cube::sample(
            &Point3::new(1.0, 2.0, 3.0),
            &Vector3::new(0.5, 0.5, 0.5),
            |p: &Point3<Real>| p.x + p.y + p.z,
        );
        assert_eq!(cube.corners[3], Point3::new(1.0, 2.0, 3.0));
        assert_eq!(cube.corners[5], Point3::new(1.5, 2.5, 3.5));
        assert_eq!(cube.values[5], 7.5);
    }
}
