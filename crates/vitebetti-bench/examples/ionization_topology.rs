//! Euler characteristic of a synthetic ionization field across thresholds.
//!
//! Demonstrates: bubble field → threshold sweep → cubical complex → χ, then
//! a closer look at the cell counts of the reference snapshot.

use vitebetti_bench::{bubble_field, reference_grid, threshold_sweep};
use vitebetti_complex::{ComplexBuilder, EulerCurve, PassOrder};
use vitebetti_core::ThresholdMode;

fn main() {
    println!("=== Vitebetti Ionization Topology Example ===\n");

    let field = bubble_field(32, 48, 42);
    let builder = ComplexBuilder::new();
    let thresholds = threshold_sweep(9);

    let curve = EulerCurve::compute(
        field.view().into_dyn(),
        &thresholds,
        ThresholdMode::Above,
        &builder,
    )
    .unwrap();

    println!("{:>10} {:>10} {:>8}", "threshold", "filling", "chi");
    for point in curve.points() {
        println!(
            "{:>10.2} {:>10.4} {:>8}",
            point.threshold, point.filling_factor, point.chi
        );
    }

    // --- Reference snapshot ---
    let grid = reference_grid(42).unwrap();
    let cubemap = builder.build(&grid);
    println!(
        "\nReference snapshot: {} voxels, {} ionized",
        grid.shape().len(),
        grid.occupied_count()
    );
    println!("  lattice {:?}", cubemap.shape().dims());
    println!("  {}", cubemap.cell_counts());

    let strict = builder
        .pass_order(PassOrder::StrictByDimension)
        .build(&grid);
    println!("  strict pass order identical: {}", strict == cubemap);
}
