//! Error types for grid construction and evaluation.
//!
//! Two families: [`ShapeError`] for arrays that are not a non-empty rank-3
//! lattice, and [`ValueError`] for element values the topology passes cannot
//! interpret. [`GridError`] wraps both for entry points that can fail either
//! way.

use crate::axis::Axis;
use std::error::Error;
use std::fmt;

/// The input array does not describe a usable 3D lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The array is not rank 3.
    WrongRank {
        /// Number of axes the array actually has.
        ndim: usize,
    },
    /// An axis has zero length.
    EmptyAxis {
        /// The zero-length axis.
        axis: Axis,
    },
    /// The refined lattice `(2nx-1, 2ny-1, 2nz-1)` would not fit in memory
    /// addressing.
    TooLarge {
        /// The requested grid extents.
        shape: [usize; 3],
    },
    /// A flat buffer does not hold exactly `nx * ny * nz` elements.
    LengthMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count supplied.
        actual: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRank { ndim } => {
                write!(f, "expected a 3-dimensional array, got {ndim} dimensions")
            }
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero length"),
            Self::TooLarge { shape } => write!(
                f,
                "grid {}x{}x{} is too large to refine into a cubical lattice",
                shape[0], shape[1], shape[2]
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} elements, shape requires {expected}")
            }
        }
    }
}

impl Error for ShapeError {}

/// An element value cannot be used by the topology passes.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueError {
    /// A cell holds a value other than 0 or 1.
    NonBinary {
        /// Grid index of the offending cell.
        index: [usize; 3],
        /// The value, rendered for diagnostics.
        value: String,
    },
    /// A cell holds NaN or an infinity.
    NotFinite {
        /// Grid index of the offending cell.
        index: [usize; 3],
    },
    /// A point position has a NaN or infinite coordinate.
    NonFinitePoint {
        /// Position of the point in the input slice.
        point: usize,
    },
    /// A threshold is NaN or infinite.
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },
    /// A cell size or box size is not finite and strictly positive.
    InvalidCellSize {
        /// The rejected size.
        value: f64,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonBinary { index, value } => {
                write!(f, "cell {index:?} holds {value}, expected 0 or 1")
            }
            Self::NotFinite { index } => write!(f, "cell {index:?} is not finite"),
            Self::NonFinitePoint { point } => {
                write!(f, "point {point} has a non-finite coordinate")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "threshold must be finite, got {value}")
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for ValueError {}

/// Any failure while turning an array into an occupancy grid or a complex.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The array shape is unusable.
    Shape(ShapeError),
    /// An element value is unusable.
    Value(ValueError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "shape error: {e}"),
            Self::Value(e) => write!(f, "value error: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Value(e) => Some(e),
        }
    }
}

impl From<ShapeError> for GridError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<ValueError> for GridError {
    fn from(e: ValueError) -> Self {
        Self::Value(e)
    }
}
