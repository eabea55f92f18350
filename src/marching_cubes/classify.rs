//! Cube classification and case-table lookups.

use crate::errors::ExtractionError;
use crate::float_types::Real;
use crate::marching_cubes::tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use std::sync::OnceLock;
use tracing::error;

/// Compute the 8-bit classification index of a cube.
///
/// Bit `i` is set iff `corner_values[i] < threshold`. The case table's
/// triangle windings were authored against this strictly-less convention.
#[inline]
pub fn classify(corner_values: &[Real; 8], threshold: Real) -> u8 {
    corner_values
        .iter()
        .enumerate()
        .fold(0u8, |index, (i, &value)| {
            if value < threshold {
                index | (1 << i)
            } else {
                index
            }
        })
}

/// 12-bit mask of the edges crossed for a classification index.
#[inline]
pub const fn lookup_edges(index: u8) -> u16 {
    EDGE_TABLE[index as usize]
}

/// Entries of a triangle-table row before its `-1` terminator.
#[inline]
fn terminated(row: &[i8; 16]) -> &[i8] {
    let len = row.iter().position(|&e| e < 0).unwrap_or(row.len());
    &row[..len]
}

/// Edge indices forming the triangles of a classification index, three per triangle.
#[inline]
pub fn lookup_triangle_edges(index: u8) -> &'static [i8] {
    let table: &'static [[i8; 16]; 256] = &TRI_TABLE;
    terminated(&table[index as usize])
}

/// Check the whole case table for internal consistency.
///
/// Every triangle list must have a length divisible by three, reference only
/// edges 0-11, and reference only edges whose bit is set in the edge mask of
/// the same case. The edge mask itself must match the corner signs it encodes.
pub fn validate_case_table() -> Result<(), ExtractionError> {
    validate_tables(&EDGE_TABLE, &TRI_TABLE)
}

/// Mask of the edges whose two corners differ in `case`.
fn crossed_edges(case: u8) -> u16 {
    EDGE_CORNERS
        .iter()
        .enumerate()
        .fold(0u16, |acc, (edge, &[a, b])| {
            if (case >> a) & 1 != (case >> b) & 1 {
                acc | (1 << edge)
            } else {
                acc
            }
        })
}

pub(crate) fn validate_tables(
    edge_table: &[u16; 256],
    tri_table: &[[i8; 16]; 256],
) -> Result<(), ExtractionError> {
    for case in 0..=255u8 {
        let mask = edge_table[case as usize];
        let expected_mask = crossed_edges(case);
        if mask != expected_mask {
            return Err(ExtractionError::CorruptCaseTable {
                case_index: case,
                detail: format!(
                    "edge mask is {mask:#05x}, corner signs give {expected_mask:#05x}"
                ),
            });
        }

        let edges = terminated(&tri_table[case as usize]);
        if edges.len() % 3 != 0 {
            return Err(ExtractionError::CorruptCaseTable {
                case_index: case,
                detail: format!("triangle list has {} entries", edges.len()),
            });
        }
        for &edge in edges {
            if !(0..12).contains(&edge) || mask & (1 << edge) == 0 {
                return Err(ExtractionError::TableIntegrityViolation {
                    case_index: case,
                    edge: edge as u8,
                });
            }
        }
    }
    Ok(())
}

/// Validates the case table once per process and caches the verdict.
pub fn case_table_is_valid() -> bool {
    static VERDICT: OnceLock<bool> = OnceLock::new();
    *VERDICT.get_or_init(|| match validate_case_table() {
        Ok(()) => true,
        Err(err) => {
            error!(%err, "marching cubes case table failed validation");
            false
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_sets_bits_for_corners_below_threshold() {
        let values = [0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
        assert_eq!(classify(&values, 0.5), 0b1000_0101);
    }

    #[test]
    fn corner_equal_to_threshold_is_not_below() {
        let values = [0.5; 8];
        assert_eq!(classify(&values, 0.5), 0);
    }

    #[test]
    fn single_corner_case_has_one_triangle() {
        assert_eq!(lookup_triangle_edges(1), &[0, 8, 3]);
        assert_eq!(lookup_edges(1), (1 << 0) | (1 << 3) | (1 << 8));
    }

    #[test]
    fn trivial_cases_produce_nothing() {
        assert_eq!(lookup_edges(0), 0);
        assert_eq!(lookup_edges(255), 0);
        assert!(lookup_triangle_edges(0).is_empty());
        assert!(lookup_triangle_edges(255).is_empty());
    }

    #[test]
    fn table_validates() {
        assert_eq!(validate_case_table(), Ok(()));
        assert!(case_table_is_valid());
    }

    #[test]
    fn flipped_mask_bit_is_a_corrupt_case() {
        let mut edges = EDGE_TABLE;
        edges[1] ^= 1 << 5;
        assert!(matches!(
            validate_tables(&edges, &TRI_TABLE),
            Err(ExtractionError::CorruptCaseTable { case_index: 1, .. })
        ));
    }

    #[test]
    fn truncated_triangle_list_is_a_corrupt_case() {
        let mut tris = TRI_TABLE;
        tris[1][2] = -1;
        let err = validate_tables(&EDGE_TABLE, &tris).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::CorruptCaseTable {
                case_index: 1,
                detail: "triangle list has 2 entries".into(),
            }
        );
    }

    #[test]
    fn edge_outside_the_mask_is_an_integrity_violation() {
        let mut tris = TRI_TABLE;
        tris[1][1] = 5;
        assert_eq!(
            validate_tables(&EDGE_TABLE, &tris),
            Err(ExtractionError::TableIntegrityViolation {
                case_index: 1,
                edge: 5,
            })
        );
    }
}
