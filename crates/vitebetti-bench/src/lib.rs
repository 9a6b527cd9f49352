//! Benchmark profiles for vitebetti.
//!
//! Provides deterministic synthetic fields for benchmarks and examples:
//!
//! - [`bubble_field`]: an ionized-fraction field made of overlapping
//!   spherical bubbles in a periodic box
//! - [`reference_grid`]: the ionized region of a 32^3 bubble field
//! - [`stress_grid`]: the same at 64^3
//! - [`threshold_sweep`]: evenly spaced thresholds across `(0, 1)`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndarray::Array3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use vitebetti_core::{GridError, OccupancyGrid, ThresholdMode};

/// Ionized-fraction threshold used by the reference profiles.
pub const REFERENCE_THRESHOLD: f64 = 0.5;

/// Build an `n`^3 field in `[0, 1]` from `bubbles` Gaussian bubbles with
/// seeded centres and radii between `n / 16` and `n / 6` voxels.
///
/// Each voxel takes the largest bubble profile covering it, measured with
/// minimum-image distances so bubbles wrap around the box.
pub fn bubble_field(n: usize, bubbles: usize, seed: u64) -> Array3<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut uniform = move || rng.random::<f64>();
    let side = n as f64;
    let (r_min, r_max) = ((side / 16.0).max(0.5), (side / 6.0).max(1.0));

    let centres: Vec<([f64; 3], f64)> = (0..bubbles)
        .map(|_| {
            let centre = [uniform() * side, uniform() * side, uniform() * side];
            (centre, r_min + uniform() * (r_max - r_min))
        })
        .collect();

    Array3::from_shape_fn((n, n, n), |(x, y, z)| {
        let voxel = [x as f64, y as f64, z as f64];
        centres
            .iter()
            .map(|(centre, radius)| {
                let d2: f64 = voxel
                    .iter()
                    .zip(centre)
                    .map(|(v, c)| {
                        let d = (v - c).abs();
                        let d = d.min(side - d);
                        d * d
                    })
                    .sum();
                (-d2 / (radius * radius)).exp()
            })
            .fold(0.0, f64::max)
    })
}

/// Reference profile: ionized region of a 32^3 field with 48 bubbles.
pub fn reference_grid(seed: u64) -> Result<OccupancyGrid, GridError> {
    threshold_grid(32, 48, seed)
}

/// Stress profile: ionized region of a 64^3 field with 384 bubbles.
///
/// Same bubble density as [`reference_grid`] at 8x the voxel count.
pub fn stress_grid(seed: u64) -> Result<OccupancyGrid, GridError> {
    threshold_grid(64, 384, seed)
}

/// `count` thresholds evenly spaced strictly inside `(0, 1)`.
pub fn threshold_sweep(count: usize) -> Vec<f64> {
    (1..=count)
        .map(|i| i as f64 / (count + 1) as f64)
        .collect()
}

fn threshold_grid(n: usize, bubbles: usize, seed: u64) -> Result<OccupancyGrid, GridError> {
    let field = bubble_field(n, bubbles, seed);
    OccupancyGrid::from_threshold(
        field.view().into_dyn(),
        REFERENCE_THRESHOLD,
        ThresholdMode::Above,
    )
}
