//! Global ↔ active cell index mapping.
//!
//! Active/inactive classification belongs to the grid geometry. Property
//! code only consumes the resulting index mapping through
//! [`ActiveIndexMap`]; [`ActiveMap`] is the concrete table-backed
//! implementation for callers that already hold an ACTNUM-style array.

use crate::dims::GridDims;
use crate::error::GridError;

/// Read-only mapping between global and active cell indices.
pub trait ActiveIndexMap {
    /// Number of cells in the full grid, active or not.
    fn cartesian_size(&self) -> usize;

    /// Number of active cells. Never exceeds [`cartesian_size`](Self::cartesian_size).
    fn active_count(&self) -> usize;

    /// Global index of the `active`-th active cell.
    ///
    /// # Panics
    ///
    /// Implementations panic if `active >= active_count()`.
    fn global_index(&self, active: usize) -> usize;

    /// Active index of a global cell, or `None` if the cell is inactive.
    fn active_index(&self, global: usize) -> Option<usize>;
}

/// A structured grid as seen by property code: dimensions plus an
/// active-index mapping.
pub trait StructuredGrid: ActiveIndexMap {
    /// Logical grid dimensions.
    fn dims(&self) -> GridDims;
}

/// Table-backed [`StructuredGrid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveMap {
    dims: GridDims,
    active_to_global: Vec<usize>,
    global_to_active: Vec<Option<usize>>,
}

impl ActiveMap {
    /// Every cell active.
    pub fn all_active(dims: GridDims) -> Self {
        let n = dims.cartesian_size();
        Self {
            dims,
            active_to_global: (0..n).collect(),
            global_to_active: (0..n).map(Some).collect(),
        }
    }

    /// Active cells are those with a non-zero entry in `actnum`.
    pub fn from_actnum(dims: GridDims, actnum: &[i32]) -> Result<Self, GridError> {
        let n = dims.cartesian_size();
        if actnum.len() != n {
            return Err(GridError::ActnumSize {
                expected: n,
                actual: actnum.len(),
            });
        }
        let mut active_to_global = Vec::with_capacity(n);
        let global_to_active = actnum
            .iter()
            .enumerate()
            .map(|(g, &flag)| {
                (flag != 0).then(|| {
                    active_to_global.push(g);
                    active_to_global.len() - 1
                })
            })
            .collect();
        Ok(Self {
            dims,
            active_to_global,
            global_to_active,
        })
    }

    /// Global indices of all active cells, ascending.
    pub fn active_cells(&self) -> &[usize] {
        &self.active_to_global
    }
}

impl ActiveIndexMap for ActiveMap {
    fn cartesian_size(&self) -> usize {
        self.dims.cartesian_size()
    }

    fn active_count(&self) -> usize {
        self.active_to_global.len()
    }

    fn global_index(&self, active: usize) -> usize {
        self.active_to_global[active]
    }

    fn active_index(&self, global: usize) -> Option<usize> {
        self.global_to_active.get(global).copied().flatten()
    }
}

impl StructuredGrid for ActiveMap {
    fn dims(&self) -> GridDims {
        self.dims
    }
}
