//! Test utilities for vitebetti development.
//!
//! - [`fixtures`]: occupancy grids with known topology and seeded random
//!   grids.
//! - [`compliance`]: assertions that a [`CubeMap`](vitebetti_complex::CubeMap)
//!   satisfies the invariants every complex must hold.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use compliance::run_full_compliance;
pub use fixtures::{random_grid, shape};
