//! Evenly spaced threshold levels.

use crate::float_types::{EPSILON, Real};
use tracing::warn;

/// Upper bound on the number of levels [`stepped`] will produce.
pub const MAX_LEVELS: usize = 1 << 16;

/// `start, start + step, start + 2·step, …` for every value below `end`.
///
/// Values are computed as `start + i·step` rather than by accumulation, so the
/// count does not drift with rounding: `stepped(-1.0, 1.0, 0.1)` has exactly 20
/// levels. Returns nothing for a non-positive or non-finite `step`, and for a
/// step so small that the range would hold more than [`MAX_LEVELS`] values.
pub fn stepped(start: Real, end: Real, step: Real) -> Vec<Real> {
    if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite()) || end <= start {
        return Vec::new();
    }
    let span = ((end - start) / step - EPSILON).ceil();
    if span > MAX_LEVELS as Real {
        warn!(start, end, step, "level range exceeds {MAX_LEVELS} values, producing none");
        return Vec::new();
    }
    let count = span.max(0.0) as usize;
    (0..count).map(|i| start + i as Real * step).collect()
}

/// `count` levels spread evenly over `[min, max]`, both ends included.
pub fn spread(min: Real, max: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![(min + max) / 2.0],
        _ => {
            let step = (max - min) / (count - 1) as Real;
            (0..count).map(|i| min + i as Real * step).collect()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_levels() {
        let levels = stepped(-1.2, 1.2, 0.4);
        assert_eq!(levels.len(), 6);
        assert!((levels[0] + 1.2).abs() < 1e-6);
        assert!(levels[3].abs() < 1e-6);
        assert!((levels[5] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn contour_levels_do_not_drift() {
        assert_eq!(stepped(-1.0, 1.0, 0.1).len(), 20);
        assert_eq!(stepped(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert!(stepped(1.0, 0.0, 0.1).is_empty());
        assert!(stepped(0.0, 1.0, 0.0).is_empty());
        assert!(stepped(0.0, 1.0, Real::NAN).is_empty());
        assert!(spread(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn tiny_step_is_rejected_instead_of_allocating() {
        assert!(stepped(0.0, 1.0, Real::MIN_POSITIVE).is_empty());
        assert!(stepped(0.0, 1.0, 1e-9).is_empty());
        assert_eq!(stepped(0.0, MAX_LEVELS as Real, 1.0).len(), MAX_LEVELS);
    }

    #[test]
    fn spread_includes_both_ends() {
        assert_eq!(spread(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(spread(0.0, 2.0, 1), vec![1.0]);
    }
}
