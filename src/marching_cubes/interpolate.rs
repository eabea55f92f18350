use crate::float_types::Real;
use nalgebra::Point3;

/// Locate the point where the field crosses `target` along a cube edge.
///
/// `p1`/`p2` are the edge's corner positions and `v1`/`v2` the field values
/// sampled there:
/// ```text
/// t = (target - v1) / (v2 - v1)
/// p = p1 + t · (p2 - p1)
/// ```
/// evaluated as `(1 - t) · p1 + t · p2` so that `t = 0` gives exactly `p1` and
/// `t = 1` gives exactly `p2`. An edge with `v1 == v2` carries
/// no crossing information and yields its midpoint.
#[inline]
pub fn interpolate(
    target: Real,
    p1: &Point3<Real>,
    v1: Real,
    p2: &Point3<Real>,
    v2: Real,
) -> Point3<Real> {
    let denom = v2 - v1;
    if denom == 0.0 {
        return nalgebra::center(p1, p2);
    }
    let t = (target - v1) / denom;
    Point3::from(p1.coords * (1.0 - t) + p2.coords * t)
}
