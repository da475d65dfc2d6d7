//! Error types for grid construction and box queries.

use std::fmt;
use strata_core::DeckError;

/// Errors arising from grid dimensions, boxes, or active maps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyDimension {
        /// The offending `(nx, ny, nz)`.
        dims: (usize, usize, usize),
    },
    /// Box bounds fall outside the parent extent.
    BoxOutOfBounds {
        /// Requested `(i1, i2, j1, j2, k1, k2)`.
        bounds: [usize; 6],
        /// Human-readable description of the valid range.
        parent: String,
    },
    /// Box bounds are inverted on some axis.
    InvertedBox {
        /// Requested `(i1, i2, j1, j2, k1, k2)`.
        bounds: [usize; 6],
    },
    /// A 1-based box bound was zero.
    ZeroOneBasedBound {
        /// Axis name, e.g. `"I1"`.
        axis: &'static str,
    },
    /// An ACTNUM-style array has the wrong length for the grid.
    ActnumSize {
        /// Cartesian size of the grid.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { dims } => {
                write!(f, "grid dimensions {dims:?} must all be non-zero")
            }
            Self::BoxOutOfBounds { bounds, parent } => {
                write!(f, "box {bounds:?} out of bounds: {parent}")
            }
            Self::InvertedBox { bounds } => write!(f, "box {bounds:?} has inverted bounds"),
            Self::ZeroOneBasedBound { axis } => {
                write!(f, "1-based box bound {axis} must be at least 1")
            }
            Self::ActnumSize { expected, actual } => {
                write!(f, "active array has {actual} entries, grid has {expected} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<GridError> for DeckError {
    fn from(err: GridError) -> Self {
        DeckError::InvalidRegion {
            reason: err.to_string(),
        }
    }
}
