//! Periodic neighbour-presence tests on the refined lattice.

use ndarray::Array3;
use vitebetti_core::{Axis, Shape3};

/// Whether both wrapped neighbours of `index` one step away along `axis`
/// are present.
pub(crate) fn present_along(
    lattice: &Array3<u8>,
    shape: Shape3,
    index: [usize; 3],
    axis: Axis,
) -> bool {
    let (prev, next) = shape.wrapped_neighbours(index, axis);
    lattice[prev] == 1 && lattice[next] == 1
}

/// Whether `index` is present along every axis in `axes`.
pub(crate) fn present_along_all(
    lattice: &Array3<u8>,
    shape: Shape3,
    index: [usize; 3],
    axes: &[Axis],
) -> bool {
    axes.iter().all(|&axis| present_along(lattice, shape, index, axis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_along_wraps_to_opposite_face() {
        let shape = Shape3::new(3, 1, 1).unwrap();
        let mut lattice = Array3::<u8>::zeros(shape.pattern());
        lattice[[1, 0, 0]] = 1;
        lattice[[2, 0, 0]] = 1;
        // Neighbours of x=0 are x=2 (wrapped) and x=1.
        assert!(present_along(&lattice, shape, [0, 0, 0], Axis::X));
        assert!(!present_along(&lattice, shape, [1, 0, 0], Axis::X));
    }

    #[test]
    fn unit_axis_reads_the_cell_itself() {
        let shape = Shape3::new(1, 1, 1).unwrap();
        let mut lattice = Array3::<u8>::zeros(shape.pattern());
        assert!(!present_along(&lattice, shape, [0, 0, 0], Axis::Y));
        lattice[[0, 0, 0]] = 1;
        assert!(present_along_all(&lattice, shape, [0, 0, 0], &Axis::ALL));
    }
}
