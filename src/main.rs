// main.rs
//
// Traces the equipotential lines of a dipole and extracts its potential shells,
// logging what came out. Run with e.g. `RUST_LOG=equipotential=debug`.

use equipotential::contour::{ContourTracer, DEFAULT_SEED_OFFSET, trace_around_charges};
use equipotential::field::{Charge, ChargeField};
use equipotential::isosurface::{ExtractParams, IsosurfaceExtractor, SignedLevelColor};
use equipotential::{ExtractionError, levels};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ExtractionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let field = ChargeField::new(vec![
        Charge::planar(-0.3, 0.0, 1.0),
        Charge::planar(0.3, 0.0, -1.0),
    ]);

    // 1) equipotential lines around each charge
    let contour_levels = levels::stepped(-1.0, 1.0, 0.1);
    let family = trace_around_charges(
        &field,
        &contour_levels,
        &ContourTracer::default(),
        DEFAULT_SEED_OFFSET,
    );
    let closed = family.iter().filter(|c| c.contour.is_closed()).count();
    let points: usize = family.iter().map(|c| c.contour.len()).sum();
    info!(
        contours = family.len(),
        closed,
        points,
        "traced contour family"
    );

    // 2) potential shells, colored by level sign
    let shell_levels = levels::stepped(-1.2, 1.2, 0.4);
    let extractor = IsosurfaceExtractor::new(ExtractParams::default().with_resolution(40))
        .with_color(SignedLevelColor::default());
    let mesh = extractor.extract(&field, &shell_levels)?;

    for shell in &mesh.shells {
        info!(
            level = shell.level,
            triangles = shell.triangle_count(),
            "shell"
        );
    }
    if let Some(bounds) = mesh.bounding_box() {
        info!(mins = ?bounds.mins, maxs = ?bounds.maxs, "shell bounds");
    }

    Ok(())
}
