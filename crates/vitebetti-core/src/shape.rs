//! Validated 3D extents and periodic index arithmetic.

use crate::axis::Axis;
use crate::error::ShapeError;

/// Extents `(nx, ny, nz)` of a non-empty 3D lattice.
///
/// Construction rejects zero-length axes and grids whose refined lattice
/// `(2nx-1, 2ny-1, 2nz-1)` would overflow `usize`, so every `Shape3` can be
/// refined and flattened without further checks.
///
/// Indices are `[x, y, z]` in row-major order: z varies fastest, and
/// [`iter`](Self::iter) walks x outermost, z innermost.
///
/// # Examples
///
/// ```
/// use vitebetti_core::{Axis, Shape3};
///
/// let shape = Shape3::new(3, 1, 2).unwrap();
/// assert_eq!(shape.len(), 6);
/// assert_eq!(shape.refined().dims(), [5, 1, 3]);
///
/// // Periodic neighbours along x wrap at both ends.
/// assert_eq!(shape.wrapped_neighbours([0, 0, 1], Axis::X), ([2, 0, 1], [1, 0, 1]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape3 {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl Shape3 {
    /// Create a shape, rejecting empty axes and unrefinable extents.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, ShapeError> {
        let dims = [nx, ny, nz];
        for axis in Axis::ALL {
            if dims[axis.index()] == 0 {
                return Err(ShapeError::EmptyAxis { axis });
            }
        }
        let refined_len = dims.iter().try_fold(1usize, |acc, &n| {
            n.checked_mul(2)
                .map(|twice| twice - 1)
                .and_then(|m| acc.checked_mul(m))
        });
        if refined_len.is_none() {
            return Err(ShapeError::TooLarge { shape: dims });
        }
        Ok(Self { nx, ny, nz })
    }

    /// Create a shape from a dynamic dimension list (e.g. `ArrayD::shape()`).
    ///
    /// Returns `Err(ShapeError::WrongRank)` unless `dims.len() == 3`.
    pub fn from_dims(dims: &[usize]) -> Result<Self, ShapeError> {
        match dims {
            &[nx, ny, nz] => Self::new(nx, ny, nz),
            _ => Err(ShapeError::WrongRank { ndim: dims.len() }),
        }
    }

    /// Extent along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Extent along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Extent along z.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Extents as `[nx, ny, nz]`.
    pub fn dims(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Extents as an `ndarray` pattern `(nx, ny, nz)`.
    pub fn pattern(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        self.dims()[axis.index()]
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Always returns `false`: construction rejects empty axes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shape of the refined cubical lattice, `(2nx-1, 2ny-1, 2nz-1)`.
    pub fn refined(&self) -> Shape3 {
        Shape3 {
            nx: 2 * self.nx - 1,
            ny: 2 * self.ny - 1,
            nz: 2 * self.nz - 1,
        }
    }

    /// Whether `index` lies inside the shape.
    pub fn contains(&self, index: [usize; 3]) -> bool {
        index[0] < self.nx && index[1] < self.ny && index[2] < self.nz
    }

    /// Row-major flat offset of `index`.
    pub fn flat_index(&self, index: [usize; 3]) -> usize {
        (index[0] * self.ny + index[1]) * self.nz + index[2]
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn unravel(&self, flat: usize) -> [usize; 3] {
        let z = flat % self.nz;
        let rest = flat / self.nz;
        [rest / self.ny, rest % self.ny, z]
    }

    /// The two periodic neighbours one step away along `axis`,
    /// returned as `(previous, next)`.
    ///
    /// Indices wrap modulo the extent of that axis; on a length-1 axis both
    /// neighbours are `index` itself.
    pub fn wrapped_neighbours(&self, index: [usize; 3], axis: Axis) -> ([usize; 3], [usize; 3]) {
        let a = axis.index();
        let n = self.extent(axis);
        let mut prev = index;
        let mut next = index;
        prev[a] = (index[a] + n - 1) % n;
        next[a] = (index[a] + 1) % n;
        (prev, next)
    }

    /// All indices in scan order: x outermost, z innermost.
    ///
    /// The closure passes depend on this order; do not change it.
    pub fn iter(&self) -> impl Iterator<Item = [usize; 3]> {
        let (ny, nz) = (self.ny, self.nz);
        (0..self.nx).flat_map(move |x| (0..ny).flat_map(move |y| (0..nz).map(move |z| [x, y, z])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_each_empty_axis() {
        assert_eq!(Shape3::new(0, 2, 2), Err(ShapeError::EmptyAxis { axis: Axis::X }));
        assert_eq!(Shape3::new(2, 0, 2), Err(ShapeError::EmptyAxis { axis: Axis::Y }));
        assert_eq!(Shape3::new(2, 2, 0), Err(ShapeError::EmptyAxis { axis: Axis::Z }));
    }

    #[test]
    fn new_rejects_unrefinable_extent() {
        assert!(matches!(
            Shape3::new(usize::MAX / 2 + 1, 1, 1),
            Err(ShapeError::TooLarge { .. })
        ));
        assert!(matches!(
            Shape3::new(1 << 20, 1 << 20, 1 << 30),
            Err(ShapeError::TooLarge { .. })
        ));
    }

    #[test]
    fn from_dims_checks_rank() {
        assert_eq!(Shape3::from_dims(&[2, 2]), Err(ShapeError::WrongRank { ndim: 2 }));
        assert_eq!(
            Shape3::from_dims(&[2, 2, 2, 2]),
            Err(ShapeError::WrongRank { ndim: 4 })
        );
        assert_eq!(Shape3::from_dims(&[4, 5, 6]).unwrap().dims(), [4, 5, 6]);
    }

    #[test]
    fn refined_single_cell_stays_single() {
        let s = Shape3::new(1, 1, 1).unwrap();
        assert_eq!(s.refined(), s);
    }

    #[test]
    fn wrapped_neighbours_on_unit_axis_are_self() {
        let s = Shape3::new(3, 1, 1).unwrap();
        assert_eq!(s.wrapped_neighbours([1, 0, 0], Axis::Y), ([1, 0, 0], [1, 0, 0]));
        assert_eq!(s.wrapped_neighbours([2, 0, 0], Axis::X), ([1, 0, 0], [0, 0, 0]));
    }

    #[test]
    fn iter_runs_x_outermost() {
        let s = Shape3::new(2, 1, 2).unwrap();
        let order: Vec<[usize; 3]> = s.iter().collect();
        assert_eq!(order, vec![[0, 0, 0], [0, 0, 1], [1, 0, 0], [1, 0, 1]]);
    }

    proptest! {
        #[test]
        fn flat_index_roundtrips_in_scan_order(
            nx in 1usize..6, ny in 1usize..6, nz in 1usize..6,
        ) {
            let s = Shape3::new(nx, ny, nz).unwrap();
            for (flat, idx) in s.iter().enumerate() {
                prop_assert_eq!(s.flat_index(idx), flat);
                prop_assert_eq!(s.unravel(flat), idx);
                prop_assert!(s.contains(idx));
            }
            prop_assert_eq!(s.iter().count(), s.len());
        }

        #[test]
        fn wrapped_neighbours_are_mutual(
            nx in 1usize..6, ny in 1usize..6, nz in 1usize..6,
            x in 0usize..6, y in 0usize..6, z in 0usize..6,
            axis_idx in 0usize..3,
        ) {
            let s = Shape3::new(nx, ny, nz).unwrap();
            let idx = [x % nx, y % ny, z % nz];
            let axis = Axis::ALL[axis_idx];
            let (prev, next) = s.wrapped_neighbours(idx, axis);
            prop_assert_eq!(s.wrapped_neighbours(prev, axis).1, idx);
            prop_assert_eq!(s.wrapped_neighbours(next, axis).0, idx);
        }
    }
}
