//! Complex invariant assertions.
//!
//! These functions verify that a [`CubeMap`] is a well-formed cubical
//! complex for the grid it was built from. Reused across the builder unit
//! tests, the integration tests and the property tests.

use indexmap::IndexSet;
use vitebetti_complex::{euler_characteristic, CubeMap};
use vitebetti_core::{Axis, CellKind, OccupancyGrid};

/// Assert `cubemap[2i, 2j, 2k] == grid[i, j, k]` for every voxel.
pub fn assert_vertices_match(cubemap: &CubeMap, grid: &OccupancyGrid) {
    assert_eq!(
        cubemap.shape(),
        grid.shape().refined(),
        "cubemap shape does not refine grid shape"
    );
    for [x, y, z] in grid.shape().iter() {
        let expected = grid.get([x, y, z]) == Some(true);
        let actual = cubemap.is_present([2 * x, 2 * y, 2 * z]);
        assert_eq!(actual, expected, "vertex for voxel ({x},{y},{z})");
    }
}

/// Assert every present edge has both vertex neighbours along its odd axis.
pub fn assert_edge_closure(cubemap: &CubeMap) {
    for (index, kind) in cubemap.iter_present() {
        if kind != CellKind::Edge {
            continue;
        }
        let axis = odd_axes(index)[0];
        assert!(
            cubemap.present_along(index, axis),
            "edge {index:?} present without both {axis} neighbours"
        );
    }
}

/// Assert every present face has both neighbour pairs along its two odd axes.
pub fn assert_face_closure(cubemap: &CubeMap) {
    for (index, kind) in cubemap.iter_present() {
        if kind != CellKind::Face {
            continue;
        }
        for axis in odd_axes(index) {
            assert!(
                cubemap.present_along(index, axis),
                "face {index:?} present without both {axis} neighbours"
            );
        }
    }
}

/// Assert every present cube has all three neighbour pairs present.
pub fn assert_cube_closure(cubemap: &CubeMap) {
    for (index, kind) in cubemap.iter_present() {
        if kind != CellKind::Cube {
            continue;
        }
        for axis in Axis::ALL {
            assert!(
                cubemap.present_along(index, axis),
                "cube {index:?} present without both {axis} neighbours"
            );
        }
    }
}

/// Assert the lattice holds only 0 and 1.
pub fn assert_binary(cubemap: &CubeMap) {
    for value in cubemap.as_array().iter() {
        assert!(*value <= 1, "lattice value {value} is not binary");
    }
}

/// Assert `iter_present` yields each present cell exactly once and agrees
/// with the per-dimension counts.
pub fn assert_present_cells_unique(cubemap: &CubeMap) {
    let cells: IndexSet<[usize; 3]> = cubemap.iter_present().map(|(idx, _)| idx).collect();
    let counts = cubemap.cell_counts();
    assert_eq!(
        cells.len(),
        counts.total(),
        "iter_present has duplicates or disagrees with cell_counts"
    );
    let lattice_ones = cubemap.as_array().iter().filter(|&&v| v == 1).count();
    assert_eq!(cells.len(), lattice_ones);
}

/// Assert the alternating sum of the counts equals the parity fold.
pub fn assert_euler_consistent(cubemap: &CubeMap) {
    let from_counts = cubemap.cell_counts().euler_characteristic();
    let from_parity = euler_characteristic(cubemap);
    assert_eq!(
        from_counts, from_parity,
        "alternating count sum {from_counts} != parity fold {from_parity}"
    );
}

/// Run every check on a complex built from `grid`.
pub fn run_full_compliance(cubemap: &CubeMap, grid: &OccupancyGrid) {
    assert_binary(cubemap);
    assert_vertices_match(cubemap, grid);
    assert_edge_closure(cubemap);
    assert_face_closure(cubemap);
    assert_cube_closure(cubemap);
    assert_present_cells_unique(cubemap);
    assert_euler_consistent(cubemap);
}

fn odd_axes(index: [usize; 3]) -> Vec<Axis> {
    Axis::ALL
        .into_iter()
        .filter(|axis| index[axis.index()] % 2 == 1)
        .collect()
}
