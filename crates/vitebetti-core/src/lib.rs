//! Core types for the vitebetti topology toolkit.
//!
//! This is the leaf crate of the workspace. It defines the occupancy grid
//! that the cubical-complex builder consumes, the lattice shape and axis
//! helpers shared by every pass, the [`Occupancy`] value trait that decides
//! which array element types count as binary, and the error taxonomy.
//!
//! # Producers
//!
//! An [`OccupancyGrid`] is usually produced outside this workspace and
//! handed over as a dense array. Two thin producers are provided for the
//! common cases:
//!
//! - [`OccupancyGrid::from_threshold`]: binarize a continuous field
//!   (e.g. an ionized-fraction box) against a threshold.
//! - [`OccupancyGrid::from_points`]: bin point positions (e.g. halo
//!   centres) into the voxels of a periodic box.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod cell;
pub mod error;
pub mod grid;
pub mod shape;
pub mod value;

pub use axis::Axis;
pub use cell::CellKind;
pub use error::{GridError, ShapeError, ValueError};
pub use grid::{OccupancyGrid, ThresholdMode};
pub use shape::Shape3;
pub use value::{checked_bit, BitRejection, Occupancy};
