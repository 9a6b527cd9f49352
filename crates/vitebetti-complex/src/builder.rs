//! Refinement of an occupancy grid into a cubical complex.
//!
//! The builder runs four passes over the refined lattice, in this order:
//!
//! 1. **Vertices**: copy each voxel to lattice cell `[2i, 2j, 2k]`.
//! 2. **Edges**: a cell still at 0 becomes 1 if, along any one axis, both
//!    periodic neighbours one step away are present.
//! 3. **Faces**: a cell still at 0 becomes 1 if an axis pair
//!    `(x, y)`, `(y, z)` or `(z, x)` is present on both of its axes.
//! 4. **Cubes**: a cell still at 0 becomes 1 if all three axes are present.
//!
//! Each pass depends on the state left by the previous one; passes are
//! never reordered or fused.
//!
//! # Scan order
//!
//! Every pass walks the lattice x outermost, z innermost, and by default
//! writes into the lattice it is reading, so a cell can observe promotions
//! made earlier in the same pass. [`PassOrder::InPlace`] keeps
//! that behaviour bit-for-bit and is the default.
//! [`PassOrder::StrictByDimension`] evaluates every pass against a snapshot
//! taken before the pass starts, which makes the result independent of scan
//! order. The test suite checks the two agree.
//!
//! Rules inside a pass are tried in a fixed priority (x before y before z,
//! then the pairs in [`Axis::PAIRS`] order) and the first satisfied rule
//! promotes the cell. All rules write the same value, so the priority is
//! unobservable today; keep it if rules ever start writing different values.

use crate::cubemap::CubeMap;
use crate::lattice::present_along_all;
use ndarray::{Array3, ArrayViewD};
use smallvec::{smallvec, SmallVec};
use vitebetti_core::{Axis, GridError, Occupancy, OccupancyGrid, Shape3};

/// Axes that must all be present for a rule to promote a cell.
pub type Rule = SmallVec<[Axis; 3]>;

/// How the closure passes read the lattice they are updating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassOrder {
    /// Mutate the lattice in place during the scan; later cells see earlier
    /// promotions from the same pass.
    #[default]
    InPlace,
    /// Read from a snapshot of the lattice taken before each pass.
    StrictByDimension,
}

/// One of the three closure passes that follow vertex placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClosurePass {
    /// Promote cells bridged along a single axis.
    Edges,
    /// Promote cells bridged along a pair of axes.
    Faces,
    /// Promote cells bridged along all three axes.
    Cubes,
}

impl ClosurePass {
    /// Passes in execution order.
    pub const ALL: [ClosurePass; 3] = [
        ClosurePass::Edges,
        ClosurePass::Faces,
        ClosurePass::Cubes,
    ];

    /// Rules of this pass in priority order.
    pub fn rules(self) -> SmallVec<[Rule; 3]> {
        match self {
            Self::Edges => Axis::ALL
                .iter()
                .map(|&axis| -> Rule { smallvec![axis] })
                .collect(),
            Self::Faces => Axis::PAIRS
                .iter()
                .map(|&(a, b)| -> Rule { smallvec![a, b] })
                .collect(),
            Self::Cubes => smallvec![SmallVec::from_slice(&Axis::ALL)],
        }
    }
}

/// Builds a [`CubeMap`] from an occupancy grid.
///
/// # Examples
///
/// ```
/// use vitebetti_complex::{ComplexBuilder, PassOrder};
/// use vitebetti_core::{OccupancyGrid, Shape3};
///
/// let grid = OccupancyGrid::from_fn(Shape3::new(2, 2, 1).unwrap(), |_| true);
/// let cubemap = ComplexBuilder::new()
///     .pass_order(PassOrder::StrictByDimension)
///     .build(&grid);
/// assert_eq!(cubemap.shape().dims(), [3, 3, 1]);
/// // A filled square: 4 vertices, 4 edges and the face in the middle.
/// assert!(cubemap.is_present([1, 1, 0]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComplexBuilder {
    pass_order: PassOrder,
}

impl ComplexBuilder {
    /// A builder with the default [`PassOrder::InPlace`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how closure passes read the lattice (default: in place).
    pub fn pass_order(mut self, pass_order: PassOrder) -> Self {
        self.pass_order = pass_order;
        self
    }

    /// The configured pass order.
    pub fn order(&self) -> PassOrder {
        self.pass_order
    }

    /// Refine `grid` into its cubical complex.
    pub fn build(&self, grid: &OccupancyGrid) -> CubeMap {
        let grid_shape = grid.shape();
        let shape = grid_shape.refined();
        let mut lattice = Array3::<u8>::zeros(shape.pattern());

        place_vertices(&mut lattice, grid);
        for pass in ClosurePass::ALL {
            close(&mut lattice, shape, pass, self.pass_order);
        }

        CubeMap::from_parts(grid_shape, lattice, grid.cell_size())
    }

    /// Validate a raw array and refine it.
    ///
    /// Returns `Err` if the array is not a non-empty rank-3 array of exact
    /// 0/1 values.
    pub fn build_array<T: Occupancy>(
        &self,
        array: ArrayViewD<'_, T>,
    ) -> Result<CubeMap, GridError> {
        let grid = OccupancyGrid::from_array(array)?;
        Ok(self.build(&grid))
    }
}

/// Refine a raw rank-3 occupancy array with the default in-place pass order.
///
/// Returns `Err(GridError::Shape)` for arrays that are not rank 3 or have an
/// empty axis and `Err(GridError::Value)` for values other than 0 and 1.
pub fn build_complex<T: Occupancy>(array: ArrayViewD<'_, T>) -> Result<CubeMap, GridError> {
    ComplexBuilder::new().build_array(array)
}

fn place_vertices(lattice: &mut Array3<u8>, grid: &OccupancyGrid) {
    for [x, y, z] in grid.iter_occupied() {
        lattice[[2 * x, 2 * y, 2 * z]] = 1;
    }
}

fn close(lattice: &mut Array3<u8>, shape: Shape3, pass: ClosurePass, order: PassOrder) {
    let rules = pass.rules();
    let snapshot = match order {
        PassOrder::InPlace => None,
        PassOrder::StrictByDimension => Some(lattice.clone()),
    };

    for index in shape.iter() {
        if lattice[index] != 0 {
            continue;
        }
        let promote = {
            let source = snapshot.as_ref().unwrap_or(&*lattice);
            rules
                .iter()
                .any(|rule| present_along_all(source, shape, index, rule))
        };
        if promote {
            lattice[index] = 1;
        }
    }
}
