//! Reusable occupancy-grid fixtures.
//!
//! Each named fixture has a known Euler characteristic once refined:
//!
//! | Fixture | χ |
//! |---------|---|
//! | [`single_voxel`] | 1 |
//! | [`solid_block`] | 1 |
//! | [`hollow_shell`] | 2 |
//! | [`ring`] | 0 |
//! | [`scattered_voxels`] | number of voxels |
//! | [`two_rings`] | 0 |

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use vitebetti_core::{OccupancyGrid, Shape3};

/// Shorthand for a valid shape; panics on empty axes.
pub fn shape(nx: usize, ny: usize, nz: usize) -> Shape3 {
    Shape3::new(nx, ny, nz).expect("fixture shapes are non-empty")
}

/// A 1x1x1 grid with its only voxel occupied.
pub fn single_voxel() -> OccupancyGrid {
    OccupancyGrid::from_fn(shape(1, 1, 1), |_| true)
}

/// An `n`-voxel solid block placed at the origin of an `extent`^3 grid.
pub fn solid_block(n: usize, extent: usize) -> OccupancyGrid {
    assert!(n <= extent, "block {n} does not fit in {extent}");
    OccupancyGrid::from_fn(shape(extent, extent, extent), |idx| {
        idx.iter().all(|&c| c < n)
    })
}

/// A 3^3 block with its centre removed. It fills a 3^3 grid exactly and is
/// offset by one voxel inside larger grids.
pub fn hollow_shell(extent: usize) -> OccupancyGrid {
    assert!(extent >= 3, "shell needs extent >= 3");
    let offset = usize::from(extent >= 4);
    OccupancyGrid::from_fn(shape(extent, extent, extent), |idx| {
        let local = idx.map(|c| c as isize - offset as isize);
        local.iter().all(|c| (0..3).contains(c)) && local != [1, 1, 1]
    })
}

/// An 8-voxel square loop in the z = 0 plane of an `extent` x `extent` x 1
/// grid (`extent >= 3`).
pub fn ring(extent: usize) -> OccupancyGrid {
    assert!(extent >= 3, "ring needs extent >= 3");
    OccupancyGrid::from_fn(shape(extent, extent, 1), |[x, y, _]| {
        x < 3 && y < 3 && !(x == 1 && y == 1)
    })
}

/// Two disjoint loops in separate z-planes of a 4x4x3 grid.
pub fn two_rings() -> OccupancyGrid {
    OccupancyGrid::from_fn(shape(4, 4, 3), |[x, y, z]| {
        z != 1 && x < 3 && y < 3 && !(x == 1 && y == 1)
    })
}

/// Voxels on every other site of a 1D line, none adjacent, in a
/// `2 * count - 1` x 1 x 1 grid.
pub fn scattered_voxels(count: usize) -> OccupancyGrid {
    assert!(count >= 1, "need at least one voxel");
    OccupancyGrid::from_fn(shape(2 * count - 1, 1, 1), |[x, _, _]| x % 2 == 0)
}

/// A reproducible random grid where each voxel is occupied with
/// probability `density`.
pub fn random_grid(dims: [usize; 3], density: f64, seed: u64) -> OccupancyGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    OccupancyGrid::from_fn(shape(dims[0], dims[1], dims[2]), |_| rng.random_bool(density))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_occupancy() {
        assert_eq!(single_voxel().occupied_count(), 1);
        assert_eq!(solid_block(2, 4).occupied_count(), 8);
        assert_eq!(hollow_shell(3).occupied_count(), 26);
        assert_eq!(hollow_shell(5).occupied_count(), 26);
        assert_eq!(ring(4).occupied_count(), 8);
        assert_eq!(two_rings().occupied_count(), 16);
        assert_eq!(scattered_voxels(3).occupied_count(), 3);
    }

    #[test]
    fn random_grid_is_reproducible() {
        let a = random_grid([4, 3, 5], 0.4, 7);
        let b = random_grid([4, 3, 5], 0.4, 7);
        assert_eq!(a, b);
        assert_eq!(random_grid([3, 3, 3], 0.0, 1).occupied_count(), 0);
        assert_eq!(random_grid([3, 3, 3], 1.0, 1).occupied_count(), 27);
    }
}
