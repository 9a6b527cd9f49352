//! Vitebetti: cubical-complex topology of simulated ionization fields.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! vitebetti sub-crates. A binary occupancy grid (for example the ionized
//! region of a reionization snapshot) is refined into a cubical complex whose
//! Euler characteristic summarizes the topology of the selected region.
//!
//! # Quick start
//!
//! ```rust
//! use vitebetti::prelude::*;
//! use vitebetti::ndarray::Array3;
//!
//! // Ionized fraction rising along x.
//! let xfrac = Array3::from_shape_fn((4, 4, 4), |(x, _, _)| x as f64 / 3.0);
//! let ionized =
//!     OccupancyGrid::from_threshold(xfrac.view().into_dyn(), 0.5, ThresholdMode::Above).unwrap();
//!
//! let cubemap = ComplexBuilder::new().build(&ionized);
//! assert_eq!(cubemap.shape().dims(), [7, 7, 7]);
//! // The ionized half is a solid 2x4x4 slab.
//! assert_eq!(euler_characteristic(&cubemap), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `vitebetti-core` | Occupancy grids, shapes, cell kinds, errors |
//! | [`complex`] | `vitebetti-complex` | Complex builder, `CubeMap`, Euler evaluation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Occupancy grids and shared types (`vitebetti-core`).
///
/// Produce an [`grid::OccupancyGrid`] from a raw 0/1 array, a thresholded
/// field or binned point positions.
pub use vitebetti_core as grid;

/// Cubical complexes and the Euler characteristic (`vitebetti-complex`).
///
/// [`complex::ComplexBuilder`] refines a grid into a [`complex::CubeMap`];
/// [`complex::euler_characteristic`] reduces it to a single integer and
/// [`complex::EulerCurve`] sweeps a threshold.
pub use vitebetti_complex as complex;

/// The array crate used at the input and output boundaries.
pub use ndarray;

/// Common imports for typical vitebetti usage.
///
/// ```rust
/// use vitebetti::prelude::*;
/// ```
pub mod prelude {
    // Grids
    pub use vitebetti_core::{Axis, CellKind, OccupancyGrid, Shape3, ThresholdMode};

    // Errors
    pub use vitebetti_core::{GridError, ShapeError, ValueError};

    // Complex
    pub use vitebetti_complex::{
        build_complex, euler_characteristic, euler_characteristic_seq, CellCounts,
        ComplexBuilder, CubeMap, EulerCurve, PassOrder,
    };
}
