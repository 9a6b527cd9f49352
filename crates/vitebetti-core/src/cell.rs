//! Classification of lattice coordinates into cell dimensions.

/// Dimension of a cell in the refined cubical lattice.
///
/// A lattice coordinate with `d` odd components is a `d`-cell:
/// all-even coordinates are vertices (one per original voxel), one odd
/// component is an edge, two are a face and three are a cube.
///
/// # Examples
///
/// ```
/// use vitebetti_core::CellKind;
///
/// assert_eq!(CellKind::of([2, 0, 4]), CellKind::Vertex);
/// assert_eq!(CellKind::of([1, 0, 4]), CellKind::Edge);
/// assert_eq!(CellKind::of([1, 3, 4]), CellKind::Face);
/// assert_eq!(CellKind::of([1, 3, 5]), CellKind::Cube);
/// assert_eq!(CellKind::Face.sign(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    /// 0-cell.
    Vertex,
    /// 1-cell.
    Edge,
    /// 2-cell.
    Face,
    /// 3-cell.
    Cube,
}

impl CellKind {
    /// All kinds in increasing dimension.
    pub const ALL: [CellKind; 4] = [
        CellKind::Vertex,
        CellKind::Edge,
        CellKind::Face,
        CellKind::Cube,
    ];

    /// Classify a lattice coordinate by its number of odd components.
    pub fn of(coord: [usize; 3]) -> Self {
        let odd = coord.iter().filter(|&&c| c % 2 == 1).count();
        Self::ALL[odd]
    }

    /// Topological dimension (0..=3).
    pub fn dimension(self) -> usize {
        match self {
            Self::Vertex => 0,
            Self::Edge => 1,
            Self::Face => 2,
            Self::Cube => 3,
        }
    }

    /// Contribution of one cell of this kind to the Euler characteristic,
    /// `(-1)^dimension`.
    pub fn sign(self) -> i64 {
        if self.dimension() % 2 == 0 {
            1
        } else {
            -1
        }
    }
}
