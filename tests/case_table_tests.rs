use equipotential::float_types::Real;
use equipotential::marching_cubes::tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use equipotential::marching_cubes::{
    case_table_is_valid, classify, lookup_edges, lookup_triangle_edges, validate_case_table,
};

#[test]
fn whole_table_passes_integrity_check() {
    assert_eq!(validate_case_table(), Ok(()));
    assert!(case_table_is_valid());
}

#[test]
fn uniform_cubes_have_no_triangles() {
    for index in [0u8, 255] {
        assert_eq!(lookup_edges(index), 0);
        assert!(lookup_triangle_edges(index).is_empty());
    }
}

#[test]
fn every_non_uniform_case_has_triangles() {
    for index in 1..=254u8 {
        let tris = lookup_triangle_edges(index);
        assert!(!tris.is_empty(), "case {index}");
        assert_eq!(tris.len() % 3, 0, "case {index}");
        assert!(tris.len() <= 15);
    }
}

#[test]
fn complementary_cases_cross_the_same_edges() {
    for index in 0..=255u8 {
        assert_eq!(lookup_edges(index), lookup_edges(!index));
    }
}

#[test]
fn classification_matches_edge_mask() {
    // Corner 3 alone below the threshold: edges 2, 3 and 11 touch it.
    let mut values: [Real; 8] = [1.0; 8];
    values[3] = -1.0;
    let index = classify(&values, 0.0);
    assert_eq!(index, 0b0000_1000);

    let expected = EDGE_CORNERS
        .iter()
        .enumerate()
        .filter(|(_, c)| c.contains(&3))
        .fold(0u16, |mask, (edge, _)| mask | (1 << edge));
    assert_eq!(lookup_edges(index), expected);
    assert_eq!(EDGE_TABLE[usize::from(index)], expected);
    assert_eq!(TRI_TABLE[usize::from(index)][3], -1);
}

#[test]
fn threshold_equal_to_value_counts_as_outside() {
    let values: [Real; 8] = [0.5; 8];
    assert_eq!(classify(&values, 0.5), 0);
    assert_eq!(classify(&values, 0.6), 255);
}
