mod support;

use equipotential::errors::ExtractionError;
use equipotential::float_types::Real;
use equipotential::float_types::parry3d::bounding_volume::Aabb;
use equipotential::isosurface::{
    self, ExtractParams, IntegrityPolicy, IsosurfaceExtractor, LevelColor, SignedLevelColor,
};
use nalgebra::Point3;
use support::{approx_eq, dipole, single_charge, sphere_sdf};

#[test]
fn sphere_vertices_lie_within_one_voxel_diagonal() {
    let params = ExtractParams::strict().with_resolution(20);
    let field = sphere_sdf(0.5);
    let mesh = isosurface::extract_with(&field, &[0.0], &params, None).unwrap();

    assert!(mesh.triangle_count() > 0);
    assert_eq!(mesh.vertex_count() % 3, 0);
    let tolerance = params.voxel_diagonal();
    for p in &mesh.positions {
        assert!(
            (p.coords.norm() - 0.5).abs() <= tolerance,
            "vertex {p:?} is off the sphere"
        );
    }

    let bounds = mesh.bounding_box().unwrap();
    for axis in 0..3 {
        assert!(approx_eq(bounds.mins[axis], -0.5, tolerance));
        assert!(approx_eq(bounds.maxs[axis], 0.5, tolerance));
    }
}

#[test]
fn free_function_uses_the_given_grid() {
    let bounds = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let coarse = isosurface::extract(&sphere_sdf(0.5), &[0.0], 8, bounds).unwrap();
    let fine = isosurface::extract(&sphere_sdf(0.5), &[0.0], 24, bounds).unwrap();
    assert!(coarse.triangle_count() > 0);
    assert!(fine.triangle_count() > coarse.triangle_count());
    assert!(!fine.is_colored());
}

#[test]
fn grid_entirely_on_one_side_yields_nothing() {
    let params = ExtractParams::default().with_resolution(6);
    let inside = isosurface::extract_with(&sphere_sdf(10.0), &[0.0], &params, None).unwrap();
    let constant = |_: &Point3<Real>| -> Real { 1.0 };
    let outside = isosurface::extract_with(&constant, &[0.5], &params, None).unwrap();

    assert!(inside.is_empty());
    assert!(outside.is_empty());
    assert_eq!(inside.shells.len(), 1);
    assert_eq!(inside.shells[0].triangle_count(), 0);
}

#[test]
fn repeated_extraction_is_identical() {
    let extractor = IsosurfaceExtractor::new(ExtractParams::default().with_resolution(12));
    let field = dipole(0.6);
    let levels = [-0.4, 0.4];
    let first = extractor.extract(&field, &levels).unwrap();
    let second = extractor.extract(&field, &levels).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.triangle_count(),
        isosurface::extract_with(&field, &levels, extractor.params(), None)
            .unwrap()
            .triangle_count()
    );
}

#[test]
fn shells_follow_level_order() {
    // V = 1 / r: level 4 is the sphere r = 0.25, level 2 the sphere r = 0.5.
    let field = single_charge();
    let params = ExtractParams::default().with_resolution(24);
    let mesh = IsosurfaceExtractor::new(params.clone())
        .extract(&field, &[4.0, 2.0])
        .unwrap();

    assert_eq!(mesh.shells.len(), 2);
    assert_eq!(mesh.shells[0].level, 4.0);
    assert_eq!(mesh.shells[0].vertices.end, mesh.shells[1].vertices.start);
    assert_eq!(mesh.shells[1].vertices.end, mesh.vertex_count());

    let radius = |range: std::ops::Range<usize>| {
        let n = range.len() as Real;
        mesh.positions[range].iter().map(|p| p.coords.norm()).sum::<Real>() / n
    };
    let tolerance = params.voxel_diagonal();
    assert!(approx_eq(radius(mesh.shells[0].vertices.clone()), 0.25, tolerance));
    assert!(approx_eq(radius(mesh.shells[1].vertices.clone()), 0.5, tolerance));
}

#[test]
fn colors_stay_parallel_to_positions() {
    let palette = SignedLevelColor::default();
    let field = dipole(0.6);
    let mesh = IsosurfaceExtractor::default()
        .with_color(palette)
        .extract(&field, &[0.2, -0.2])
        .unwrap();

    assert!(mesh.triangle_count() > 0);
    assert!(mesh.is_colored());
    assert_eq!(mesh.colors.len(), mesh.positions.len());
    for shell in &mesh.shells {
        let expected = palette.color(shell.level);
        assert!(mesh.colors[shell.vertices.clone()].iter().all(|c| *c == expected));
    }
    let buffer = mesh.color_buffer().unwrap();
    assert_eq!(buffer.len(), mesh.position_buffer().len());
}

#[test]
fn closure_palettes_are_accepted() {
    let mesh = IsosurfaceExtractor::new(ExtractParams::default().with_resolution(8))
        .with_color(|level: Real| [level as f32, 0.0, 0.0])
        .extract(&sphere_sdf(0.5), &[0.0, 0.25])
        .unwrap();
    let last = mesh.shells[1].vertices.start;
    assert_eq!(mesh.colors[last], [0.25, 0.0, 0.0]);
}

#[test]
fn invalid_parameters_are_rejected() {
    let field = sphere_sdf(0.5);
    let zero = ExtractParams::default().with_resolution(0);
    let flat = ExtractParams::default().with_bounds(Aabb::new(
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
    ));

    assert!(matches!(
        isosurface::extract_with(&field, &[0.0], &zero, None),
        Err(ExtractionError::InvalidParams(_))
    ));
    assert!(matches!(
        isosurface::extract_with(&field, &[0.0], &flat, None),
        Err(ExtractionError::InvalidParams(_))
    ));
}

#[test]
fn strict_and_lenient_policies_agree_on_a_valid_table() {
    let field = dipole(0.6);
    let strict = ExtractParams::default()
        .with_resolution(10)
        .with_integrity(IntegrityPolicy::Fail);
    let lenient = strict.clone().with_integrity(IntegrityPolicy::Skip);
    assert_eq!(
        isosurface::extract_with(&field, &[0.2], &strict, None).unwrap(),
        isosurface::extract_with(&field, &[0.2], &lenient, None).unwrap()
    );
}

#[test]
fn no_levels_no_shells() {
    let mesh = IsosurfaceExtractor::default()
        .extract(&sphere_sdf(0.5), &[])
        .unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.shells.is_empty());
}
