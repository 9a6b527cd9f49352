use ndarray::{Array, Array2, Array3, IxDyn};
use vitebetti_complex::{
    build_complex, euler_characteristic, euler_characteristic_seq, ComplexBuilder, PassOrder,
};
use vitebetti_core::{Axis, GridError, OccupancyGrid, ShapeError};
use vitebetti_test_utils::fixtures::{
    hollow_shell, ring, scattered_voxels, shape, single_voxel, solid_block, two_rings,
};
use vitebetti_test_utils::run_full_compliance;

fn chi(grid: &OccupancyGrid) -> i64 {
    let cubemap = ComplexBuilder::new().build(grid);
    run_full_compliance(&cubemap, grid);
    euler_characteristic(&cubemap)
}

#[test]
fn single_voxel_is_a_point() {
    let cubemap = build_complex(Array3::<u8>::ones((1, 1, 1)).view().into_dyn()).unwrap();
    assert_eq!(cubemap.shape().dims(), [1, 1, 1]);
    assert_eq!(cubemap.get([0, 0, 0]), Some(1));
    assert_eq!(euler_characteristic(&cubemap), 1);
    assert_eq!(chi(&single_voxel()), 1);
}

#[test]
fn adjacent_voxels_form_a_segment() {
    let cubemap = build_complex(Array3::<bool>::from_elem((2, 1, 1), true).view().into_dyn())
        .unwrap();
    assert_eq!(cubemap.shape().dims(), [3, 1, 1]);
    assert_eq!(cubemap.as_array().iter().copied().collect::<Vec<_>>(), vec![1, 1, 1]);
    assert_eq!(euler_characteristic(&cubemap), 1);
}

#[test]
fn empty_grids_have_zero_chi() {
    for dims in [(1, 1, 1), (2, 3, 1), (4, 4, 4), (5, 1, 3)] {
        let cubemap = build_complex(Array3::<u8>::zeros(dims).view().into_dyn()).unwrap();
        assert!(cubemap.as_array().iter().all(|&v| v == 0), "{dims:?}");
        assert_eq!(euler_characteristic(&cubemap), 0, "{dims:?}");
    }
}

#[test]
fn solid_blocks_are_contractible() {
    for n in 1..=4 {
        assert_eq!(chi(&solid_block(n, n)), 1, "block {n}");
    }
    assert_eq!(chi(&solid_block(2, 4)), 1);
    assert_eq!(chi(&solid_block(3, 5)), 1);
}

#[test]
fn hollow_shell_encloses_a_cavity() {
    for extent in 3..=6 {
        assert_eq!(chi(&hollow_shell(extent)), 2, "extent {extent}");
    }
    let counts = ComplexBuilder::new().build(&hollow_shell(3)).cell_counts();
    assert_eq!(counts.by_dim(), [26, 48, 24, 0]);
}

#[test]
fn loops_have_zero_chi() {
    assert_eq!(chi(&ring(3)), 0);
    assert_eq!(chi(&ring(4)), 0);
    assert_eq!(chi(&two_rings()), 0);
    let counts = ComplexBuilder::new().build(&ring(4)).cell_counts();
    assert_eq!(counts.by_dim(), [8, 8, 0, 0]);
}

#[test]
fn disconnected_voxels_count_components() {
    for count in 1..=5 {
        assert_eq!(chi(&scattered_voxels(count)), count as i64);
    }
}

#[test]
fn full_plane_does_not_close_into_a_torus() {
    // The odd-length lattice has no cell between the last and first vertex,
    // so a fully occupied periodic plane still refines to a disc.
    let plane = OccupancyGrid::from_fn(shape(3, 3, 3), |[_, _, z]| z == 0);
    assert_eq!(chi(&plane), 1);
    let slab = OccupancyGrid::from_fn(shape(3, 3, 1), |_| true);
    let counts = ComplexBuilder::new().build(&slab).cell_counts();
    assert_eq!(counts.by_dim(), [9, 12, 4, 0]);
}

#[test]
fn pass_orders_agree_on_fixtures() {
    let strict = ComplexBuilder::new().pass_order(PassOrder::StrictByDimension);
    for grid in [
        single_voxel(),
        solid_block(3, 4),
        hollow_shell(5),
        ring(4),
        two_rings(),
        scattered_voxels(4),
    ] {
        assert_eq!(ComplexBuilder::new().build(&grid), strict.build(&grid));
    }
}

#[test]
fn raw_parity_fold_differs_from_refined_chi() {
    // Applied directly to a grid, every voxel is read as a lattice cell.
    let pair = Array3::<u8>::ones((2, 1, 1));
    assert_eq!(euler_characteristic_seq(pair.view().into_dyn()), Ok(0));
    let solid = Array3::<u8>::ones((3, 3, 3));
    assert_eq!(euler_characteristic_seq(solid.view().into_dyn()), Ok(1));
}

#[test]
fn wrong_rank_is_rejected_by_both_entry_points() {
    let flat = Array2::<u8>::ones((3, 3));
    let deep = Array::<u8, _>::ones(IxDyn(&[2, 2, 2, 2]));
    for input in [flat.into_dyn(), deep] {
        let ndim = input.ndim();
        let err = GridError::Shape(ShapeError::WrongRank { ndim });
        assert_eq!(build_complex(input.view()), Err(err.clone()));
        assert_eq!(euler_characteristic_seq(input.view()), Err(err));
    }
}

#[test]
fn zero_length_axis_is_rejected() {
    let hollow = Array3::<u8>::zeros((3, 0, 2));
    assert_eq!(
        build_complex(hollow.view().into_dyn()),
        Err(GridError::Shape(ShapeError::EmptyAxis { axis: Axis::Y }))
    );
}
