//! The refined cubical lattice produced by [`ComplexBuilder`](crate::ComplexBuilder).

use crate::euler::CellCounts;
use crate::lattice;
use ndarray::{Array3, ArrayView3};
use vitebetti_core::{Axis, CellKind, OccupancyGrid, Shape3};

/// A cubical complex stored on an integer lattice of shape
/// `(2nx-1, 2ny-1, 2nz-1)`.
///
/// A lattice cell with `d` odd coordinates is a `d`-cell ([`CellKind`]).
/// Value 1 means the cell is part of the complex, 0 that it is absent.
/// Vertex cells `[2i, 2j, 2k]` mirror the occupancy grid the map was built
/// from, and every present higher cell has its governing boundary cells
/// present.
///
/// A `CubeMap` is a plain value: it is only created by the builder and has
/// no internal consumers beyond the Euler evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeMap {
    grid_shape: Shape3,
    shape: Shape3,
    lattice: Array3<u8>,
    cell_size: Option<f64>,
}

impl CubeMap {
    /// Wrap a lattice produced by the builder. `lattice` must have the
    /// refined shape of `grid_shape`.
    pub(crate) fn from_parts(
        grid_shape: Shape3,
        lattice: Array3<u8>,
        cell_size: Option<f64>,
    ) -> Self {
        let shape = grid_shape.refined();
        debug_assert_eq!(lattice.dim(), shape.pattern());
        Self {
            grid_shape,
            shape,
            lattice,
            cell_size,
        }
    }

    /// Shape of the refined lattice.
    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    /// Shape of the occupancy grid this map was built from.
    pub fn grid_shape(&self) -> Shape3 {
        self.grid_shape
    }

    /// Physical distance between neighbouring lattice cells: half the voxel
    /// size of the source grid, when that was known.
    pub fn spacing(&self) -> Option<f64> {
        self.cell_size.map(|h| h / 2.0)
    }

    /// Value (0 or 1) at `index`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<u8> {
        self.lattice.get(index).copied()
    }

    /// Whether the cell at `index` is part of the complex.
    pub fn is_present(&self, index: [usize; 3]) -> bool {
        self.get(index) == Some(1)
    }

    /// Whether both periodic neighbours of `index` one step along `axis`
    /// are present. Out-of-bounds indices report `false`.
    pub fn present_along(&self, index: [usize; 3], axis: Axis) -> bool {
        self.shape.contains(index)
            && lattice::present_along(&self.lattice, self.shape, index, axis)
    }

    /// Present cells with their kind, in scan order (x outermost).
    pub fn iter_present(&self) -> impl Iterator<Item = ([usize; 3], CellKind)> + '_ {
        self.lattice
            .indexed_iter()
            .filter(|(_, value)| **value == 1)
            .map(|((x, y, z), _)| {
                let index = [x, y, z];
                (index, CellKind::of(index))
            })
    }

    /// Number of present cells of each dimension.
    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for (_, kind) in self.iter_present() {
            counts.add(kind);
        }
        counts
    }

    /// Recover the occupancy grid from the vertex cells.
    pub fn vertex_grid(&self) -> OccupancyGrid {
        let mut grid = OccupancyGrid::from_fn(self.grid_shape, |[x, y, z]| {
            self.lattice[[2 * x, 2 * y, 2 * z]] == 1
        });
        if let Some(h) = self.cell_size {
            let attached = grid.set_cell_size(h);
            debug_assert!(attached.is_ok(), "cell size comes from a validated grid");
        }
        grid
    }

    /// Borrow the lattice.
    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.lattice.view()
    }

    /// Take ownership of the lattice.
    pub fn into_array(self) -> Array3<u8> {
        self.lattice
    }
}
