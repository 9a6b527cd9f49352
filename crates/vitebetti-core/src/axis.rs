//! Lattice axes and the fixed order in which closure rules consult them.

use std::fmt;

/// One of the three lattice axes.
///
/// Axis order matters: closure rules are tried x first, then y, then z,
/// and scans run x outermost, z innermost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First array axis.
    X,
    /// Second array axis.
    Y,
    /// Third array axis (fastest varying in memory).
    Z,
}

impl Axis {
    /// All axes in rule priority order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Axis pairs in face-rule priority order: `(x, y)`, `(y, z)`, `(z, x)`.
    pub const PAIRS: [(Axis, Axis); 3] = [
        (Axis::X, Axis::Y),
        (Axis::Y, Axis::Z),
        (Axis::Z, Axis::X),
    ];

    /// Position of this axis in an `[x, y, z]` index.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}
