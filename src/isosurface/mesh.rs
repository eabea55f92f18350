//! Triangle soup produced by the extractor, plus level-to-color mapping.

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::marching_cubes::Triangle;
use nalgebra::Point3;
use std::ops::Range;

/// Linear RGB color, one per vertex.
pub type Color = [f32; 3];

/// Maps a threshold level to a shell color, independent of position.
pub trait LevelColor {
    fn color(&self, level: Real) -> Color;
}

impl<F> LevelColor for F
where
    F: Fn(Real) -> Color,
{
    fn color(&self, level: Real) -> Color {
        self(level)
    }
}

/// Red for positive levels, blue for negative ones, green for the zero shell.
///
/// Channel intensity is `|level| / scale`, so levels of magnitude `scale`
/// render at full intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedLevelColor {
    pub scale: Real,
}

impl Default for SignedLevelColor {
    fn default() -> Self {
        Self { scale: 1.2 }
    }
}

impl LevelColor for SignedLevelColor {
    fn color(&self, level: Real) -> Color {
        let red = if level > 0.0 { level / self.scale } else { 0.0 };
        let green = if level.abs() < 0.001 { 1.0 } else { 0.0 };
        let blue = if level < 0.0 { -level / self.scale } else { 0.0 };
        [red as f32, green as f32, blue as f32]
    }
}

/// Vertex range of one extracted shell inside a [`ShellMesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub level: Real,
    pub vertices: Range<usize>,
}

impl Shell {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Flat triangle list: every three consecutive positions form one triangle.
///
/// `colors` is either empty or parallel to `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellMesh {
    pub positions: Vec<Point3<Real>>,
    pub colors: Vec<Color>,
    pub shells: Vec<Shell>,
}

impl ShellMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_colored(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Iterate triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = &[Point3<Real>]> {
        self.positions.chunks_exact(3)
    }

    /// Append one shell's triangles, colored with `color` if given.
    ///
    /// Every shell of a mesh is pushed either with or without a color, which keeps
    /// `colors` empty or parallel to `positions`.
    pub(crate) fn push_shell(&mut self, level: Real, triangles: &[Triangle], color: Option<Color>) {
        let start = self.positions.len();
        self.positions.extend(triangles.iter().flatten().copied());
        if let Some(color) = color {
            self.colors.resize(self.positions.len(), color);
        }
        self.shells.push(Shell {
            level,
            vertices: start..self.positions.len(),
        });
    }

    /// Positions as `x, y, z` floats, ready for a vertex buffer.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Colors as `r, g, b` floats parallel to [`ShellMesh::position_buffer`].
    pub fn color_buffer(&self) -> Option<Vec<f32>> {
        self.is_colored()
            .then(|| self.colors.iter().flatten().copied().collect())
    }

    /// Tight bounding box of all vertices, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let (mins, maxs) = self
            .positions
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Aabb::new(mins, maxs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_colors_follow_level_sign() {
        let palette = SignedLevelColor::default();
        assert_eq!(palette.color(1.2), [1.0, 0.0, 0.0]);
        assert_eq!(palette.color(-0.6), [0.0, 0.0, 0.5]);
        assert_eq!(palette.color(0.0), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn colored_shells_keep_buffers_parallel() {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = ShellMesh::new();
        mesh.push_shell(0.4, &[tri, tri], Some([1.0, 0.0, 0.0]));
        mesh.push_shell(-0.4, &[tri], Some([0.0, 0.0, 1.0]));

        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.colors.len(), mesh.positions.len());
        assert_eq!(mesh.shells[1].vertices, 6..9);
        assert_eq!(mesh.shells[0].triangle_count(), 2);
        assert_eq!(mesh.position_buffer().len(), 27);
        assert_eq!(mesh.color_buffer().map(|c| c.len()), Some(27));

        let aabb = mesh.bounding_box().unwrap();
        assert_eq!(aabb.maxs, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn empty_colored_shells_keep_buffers_parallel() {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = ShellMesh::new();
        mesh.push_shell(-0.8, &[], Some([0.0, 0.0, 1.0]));
        mesh.push_shell(0.0, &[tri], Some([0.0, 1.0, 0.0]));
        mesh.push_shell(0.8, &[], Some([1.0, 0.0, 0.0]));

        assert_eq!(mesh.shells.len(), 3);
        assert!(mesh.shells[0].vertices.is_empty());
        assert_eq!(mesh.colors, vec![[0.0, 1.0, 0.0]; 3]);
        assert_eq!(mesh.colors.len(), mesh.positions.len());
    }

    #[test]
    fn uncolored_mesh_has_no_color_buffer() {
        let mut mesh = ShellMesh::new();
        mesh.push_shell(0.0, &[], None);
        assert!(mesh.is_empty());
        assert_eq!(mesh.color_buffer(), None);
        assert_eq!(mesh.bounding_box(), None);
    }
}
