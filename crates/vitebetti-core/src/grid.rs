//! The binary occupancy grid consumed by the complex builder.

use crate::error::{GridError, ShapeError, ValueError};
use crate::shape::Shape3;
use crate::value::{checked_bit, Occupancy};
use ndarray::{Array3, ArrayView3, ArrayViewD, Ix3};

/// Which side of a threshold counts as occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Occupied where `value > threshold`.
    #[default]
    Above,
    /// Occupied where `value < threshold`.
    Below,
}

impl ThresholdMode {
    fn selects(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Above => value > threshold,
            Self::Below => value < threshold,
        }
    }
}

/// A rank-3 binary grid flagging which voxels satisfy a selection predicate.
///
/// Axis order is `(x, y, z)`; all boundaries are treated as periodic by the
/// complex builder. The grid is immutable once built. It optionally carries
/// the physical edge length of one voxel, which the builder halves for the
/// refined lattice.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use vitebetti_core::OccupancyGrid;
///
/// let raw = array![[[1u8, 0], [0, 1]]];
/// let grid = OccupancyGrid::from_array(raw.view().into_dyn()).unwrap();
/// assert_eq!(grid.shape().dims(), [1, 2, 2]);
/// assert_eq!(grid.occupied_count(), 2);
/// assert_eq!(grid.get([0, 1, 1]), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    shape: Shape3,
    cells: Array3<bool>,
    cell_size: Option<f64>,
}

impl OccupancyGrid {
    /// Build a grid from an array of any rank, rejecting everything that is
    /// not a non-empty rank-3 array of exact 0/1 values.
    pub fn from_array<T: Occupancy>(array: ArrayViewD<'_, T>) -> Result<Self, GridError> {
        Shape3::from_dims(array.shape())?;
        let ndim = array.ndim();
        let view = array
            .into_dimensionality::<Ix3>()
            .map_err(|_| ShapeError::WrongRank { ndim })?;
        Self::from_array3(view)
    }

    /// Build a grid from a rank-3 array view.
    pub fn from_array3<T: Occupancy>(array: ArrayView3<'_, T>) -> Result<Self, GridError> {
        let (nx, ny, nz) = array.dim();
        let shape = Shape3::new(nx, ny, nz)?;
        let mut cells = Array3::from_elem(shape.pattern(), false);
        for ((x, y, z), &value) in array.indexed_iter() {
            cells[[x, y, z]] = checked_bit(value, [x, y, z])?;
        }
        Ok(Self {
            shape,
            cells,
            cell_size: None,
        })
    }

    /// Build a grid from a flat row-major buffer (z fastest).
    pub fn from_shape_vec<T: Occupancy>(dims: &[usize], data: Vec<T>) -> Result<Self, GridError> {
        let shape = Shape3::from_dims(dims)?;
        let actual = data.len();
        let array = Array3::from_shape_vec(shape.pattern(), data).map_err(|_| {
            ShapeError::LengthMismatch {
                expected: shape.len(),
                actual,
            }
        })?;
        Self::from_array3(array.view())
    }

    /// A grid with every voxel unoccupied.
    pub fn empty(shape: Shape3) -> Self {
        Self::from_fn(shape, |_| false)
    }

    /// A grid whose voxel `[x, y, z]` is `f([x, y, z])`.
    pub fn from_fn(shape: Shape3, mut f: impl FnMut([usize; 3]) -> bool) -> Self {
        let cells = Array3::from_shape_fn(shape.pattern(), |(x, y, z)| f([x, y, z]));
        Self {
            shape,
            cells,
            cell_size: None,
        }
    }

    /// Binarize a continuous rank-3 field against `threshold`.
    ///
    /// Returns `Err` if the field is not a non-empty rank-3 array, contains
    /// NaN or infinities, or if `threshold` itself is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::Array3;
    /// use vitebetti_core::{OccupancyGrid, ThresholdMode};
    ///
    /// let xfrac = Array3::from_shape_fn((4, 4, 4), |(x, _, _)| x as f64 / 3.0);
    /// let ionized = OccupancyGrid::from_threshold(xfrac.view().into_dyn(), 0.5, ThresholdMode::Above)
    ///     .unwrap();
    /// assert_eq!(ionized.occupied_count(), 32);
    /// ```
    pub fn from_threshold<T>(
        field: ArrayViewD<'_, T>,
        threshold: f64,
        mode: ThresholdMode,
    ) -> Result<Self, GridError>
    where
        T: Copy + Into<f64>,
    {
        if !threshold.is_finite() {
            return Err(ValueError::InvalidThreshold { value: threshold }.into());
        }
        let shape = Shape3::from_dims(field.shape())?;
        let ndim = field.ndim();
        let view = field
            .into_dimensionality::<Ix3>()
            .map_err(|_| ShapeError::WrongRank { ndim })?;
        let mut cells = Array3::from_elem(shape.pattern(), false);
        for ((x, y, z), &value) in view.indexed_iter() {
            let value: f64 = value.into();
            if !value.is_finite() {
                return Err(ValueError::NotFinite { index: [x, y, z] }.into());
            }
            cells[[x, y, z]] = mode.selects(value, threshold);
        }
        Ok(Self {
            shape,
            cells,
            cell_size: None,
        })
    }

    /// Bin point positions into the voxels of a periodic box of side
    /// `box_size`.
    ///
    /// A coordinate `p` on an axis with `n` voxels lands in voxel
    /// `floor(p / box_size * n) mod n`, so positions outside `[0, box_size)`
    /// wrap around. When the grid has the same extent on every axis the
    /// result carries `cell_size = box_size / n`.
    pub fn from_points(
        shape: Shape3,
        box_size: f64,
        points: &[[f64; 3]],
    ) -> Result<Self, GridError> {
        if !box_size.is_finite() || box_size <= 0.0 {
            return Err(ValueError::InvalidCellSize { value: box_size }.into());
        }
        let dims = shape.dims();
        let mut cells = Array3::from_elem(shape.pattern(), false);
        for (point_idx, point) in points.iter().enumerate() {
            if point.iter().any(|c| !c.is_finite()) {
                return Err(ValueError::NonFinitePoint { point: point_idx }.into());
            }
            let mut voxel = [0usize; 3];
            for (axis, slot) in voxel.iter_mut().enumerate() {
                let n = dims[axis];
                let scaled = (point[axis] / box_size * n as f64).floor();
                if !scaled.is_finite() {
                    return Err(ValueError::NonFinitePoint { point: point_idx }.into());
                }
                // rem_euclid can round up to exactly n for tiny negatives.
                *slot = (scaled.rem_euclid(n as f64) as usize).min(n - 1);
            }
            cells[voxel] = true;
        }
        let cubic = dims[0] == dims[1] && dims[1] == dims[2];
        Ok(Self {
            shape,
            cells,
            cell_size: cubic.then(|| box_size / dims[0] as f64),
        })
    }

    /// Attach the physical edge length of one voxel.
    ///
    /// Returns `Err(ValueError::InvalidCellSize)` unless `cell_size` is
    /// finite and strictly positive.
    pub fn with_cell_size(mut self, cell_size: f64) -> Result<Self, ValueError> {
        self.set_cell_size(cell_size)?;
        Ok(self)
    }

    /// In-place form of [`with_cell_size`](Self::with_cell_size). On error
    /// the grid is left unchanged.
    pub fn set_cell_size(&mut self, cell_size: f64) -> Result<(), ValueError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ValueError::InvalidCellSize { value: cell_size });
        }
        self.cell_size = Some(cell_size);
        Ok(())
    }

    /// Grid extents.
    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    /// Physical edge length of one voxel, if known.
    pub fn cell_size(&self) -> Option<f64> {
        self.cell_size
    }

    /// Occupancy of voxel `index`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Number of occupied voxels.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Fraction of voxels that are occupied.
    pub fn filling_factor(&self) -> f64 {
        self.occupied_count() as f64 / self.shape.len() as f64
    }

    /// Indices of occupied voxels in scan order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, occupied)| **occupied)
            .map(|((x, y, z), _)| [x, y, z])
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> ArrayView3<'_, bool> {
        self.cells.view()
    }
}
