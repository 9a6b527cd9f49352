use proptest::prelude::*;
use vitebetti_complex::{euler_characteristic, euler_characteristic_seq, ComplexBuilder, PassOrder};
use vitebetti_test_utils::{random_grid, run_full_compliance};

fn arb_dims() -> impl Strategy<Value = [usize; 3]> {
    [1usize..=5, 1usize..=5, 1usize..=5]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_complexes_are_closed(
        dims in arb_dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let grid = random_grid(dims, density, seed);
        let cubemap = ComplexBuilder::new().build(&grid);
        run_full_compliance(&cubemap, &grid);
        prop_assert_eq!(cubemap.vertex_grid(), grid);
    }

    #[test]
    fn pass_orders_agree(
        dims in arb_dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let grid = random_grid(dims, density, seed);
        let in_place = ComplexBuilder::new().build(&grid);
        let strict = ComplexBuilder::new()
            .pass_order(PassOrder::StrictByDimension)
            .build(&grid);
        prop_assert_eq!(in_place, strict);
    }

    #[test]
    fn build_is_deterministic(
        dims in arb_dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let grid = random_grid(dims, density, seed);
        let builder = ComplexBuilder::new();
        let first = builder.build(&grid);
        let second = builder.build(&grid);
        prop_assert_eq!(euler_characteristic(&first), euler_characteristic(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parity_fold_matches_cell_counts(
        dims in arb_dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let grid = random_grid(dims, density, seed);
        let cubemap = ComplexBuilder::new().build(&grid);
        let lattice = cubemap.as_array().into_dyn();
        prop_assert_eq!(
            euler_characteristic_seq(lattice),
            Ok(cubemap.cell_counts().euler_characteristic())
        );
    }
}
