//! Cubical complex construction and Euler characteristic evaluation.
//!
//! The pipeline is strictly one-way:
//!
//! ```text
//! OccupancyGrid ──ComplexBuilder──▶ CubeMap ──euler_characteristic──▶ i64
//! ```
//!
//! [`ComplexBuilder`] refines an `(nx, ny, nz)` occupancy grid into a
//! [`CubeMap`] of shape `(2nx-1, 2ny-1, 2nz-1)` in four ordered passes
//! (vertices, edges, faces, cubes). [`euler_characteristic`] folds the
//! complex into the alternating sum `Σ (-1)^dim`, and
//! [`euler_characteristic_seq`] applies the same parity rule to any raw
//! rank-3 0/1 array.
//!
//! # Examples
//!
//! ```
//! use ndarray::Array3;
//! use vitebetti_complex::{build_complex, euler_characteristic};
//!
//! // Two adjacent voxels: vertex, edge, vertex.
//! let grid = Array3::<u8>::ones((2, 1, 1));
//! let cubemap = build_complex(grid.view().into_dyn()).unwrap();
//! assert_eq!(cubemap.as_array().iter().copied().collect::<Vec<_>>(), vec![1, 1, 1]);
//! assert_eq!(euler_characteristic(&cubemap), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cubemap;
pub mod curve;
pub mod euler;
mod lattice;

pub use builder::{build_complex, ClosurePass, ComplexBuilder, PassOrder, Rule};
pub use cubemap::CubeMap;
pub use curve::{EulerCurve, EulerPoint};
pub use euler::{euler_characteristic, euler_characteristic_seq, CellCounts};
