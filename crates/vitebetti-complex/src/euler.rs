//! Euler characteristic of a cubical complex.
//!
//! χ = Σ (-1)^k · f_k, where f_k counts present k-cells. On the refined
//! lattice the parity of a cell's coordinate sum equals the parity of its
//! dimension, so χ collapses into a single fold: +1 for every present cell
//! with an even coordinate sum, -1 for every present cell with an odd one.
//! The fold reads only and is order-independent.

use crate::cubemap::CubeMap;
use ndarray::{ArrayViewD, Ix3};
use std::fmt;
use vitebetti_core::{checked_bit, CellKind, GridError, Occupancy, Shape3, ShapeError};

/// Contribution of a present cell at `index`.
fn parity_sign(index: [usize; 3]) -> i64 {
    if (index[0] + index[1] + index[2]) % 2 == 0 {
        1
    } else {
        -1
    }
}

/// Euler characteristic of a complex.
///
/// # Examples
///
/// ```
/// use vitebetti_complex::{euler_characteristic, ComplexBuilder};
/// use vitebetti_core::{OccupancyGrid, Shape3};
///
/// // A ring of eight voxels around an empty centre: one loop, χ = 0.
/// let ring = OccupancyGrid::from_fn(Shape3::new(3, 3, 1).unwrap(), |[x, y, _]| {
///     !(x == 1 && y == 1)
/// });
/// let cubemap = ComplexBuilder::new().build(&ring);
/// assert_eq!(euler_characteristic(&cubemap), 0);
/// ```
pub fn euler_characteristic(cubemap: &CubeMap) -> i64 {
    cubemap
        .as_array()
        .indexed_iter()
        .filter(|(_, value)| **value == 1)
        .map(|((x, y, z), _)| parity_sign([x, y, z]))
        .sum()
}

/// Apply the parity rule directly to a raw rank-3 0/1 array without
/// building a complex.
///
/// On a refined lattice this equals [`euler_characteristic`]; on a plain
/// occupancy grid it scores the grid's own coordinates.
///
/// Returns `Err(GridError::Shape)` if the array is not rank 3 or has an
/// empty axis and `Err(GridError::Value)` for values other than 0 and 1.
pub fn euler_characteristic_seq<T: Occupancy>(
    array: ArrayViewD<'_, T>,
) -> Result<i64, GridError> {
    Shape3::from_dims(array.shape())?;
    let ndim = array.ndim();
    let view = array
        .into_dimensionality::<Ix3>()
        .map_err(|_| ShapeError::WrongRank { ndim })?;
    view.indexed_iter().try_fold(0i64, |chi, ((x, y, z), &value)| {
        let index = [x, y, z];
        let present = checked_bit(value, index)?;
        Ok(if present { chi + parity_sign(index) } else { chi })
    })
}

/// Number of present cells of each dimension (the f-vector of the complex).
///
/// # Examples
///
/// ```
/// use vitebetti_complex::CellCounts;
/// use vitebetti_core::CellKind;
///
/// // A single unit cube: 8 vertices, 12 edges, 6 faces, 1 cube.
/// let counts = CellCounts::new([8, 12, 6, 1]);
/// assert_eq!(counts.count(CellKind::Edge), 12);
/// assert_eq!(counts.euler_characteristic(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellCounts {
    by_dim: [usize; 4],
}

impl CellCounts {
    /// Counts indexed by dimension: `[vertices, edges, faces, cubes]`.
    pub fn new(by_dim: [usize; 4]) -> Self {
        Self { by_dim }
    }

    /// Record one more present cell of `kind`.
    pub fn add(&mut self, kind: CellKind) {
        self.by_dim[kind.dimension()] += 1;
    }

    /// Number of present cells of `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.by_dim[kind.dimension()]
    }

    /// Counts as `[vertices, edges, faces, cubes]`.
    pub fn by_dim(&self) -> [usize; 4] {
        self.by_dim
    }

    /// Total number of present cells.
    pub fn total(&self) -> usize {
        self.by_dim.iter().sum()
    }

    /// Alternating sum `f0 - f1 + f2 - f3`.
    pub fn euler_characteristic(&self) -> i64 {
        CellKind::ALL
            .iter()
            .map(|&kind| kind.sign() * self.count(kind) as i64)
            .sum()
    }
}

impl fmt::Display for CellCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v, e, fa, c] = self.by_dim;
        write!(
            f,
            "V={v} E={e} F={fa} C={c} (chi={})",
            self.euler_characteristic()
        )
    }
}
