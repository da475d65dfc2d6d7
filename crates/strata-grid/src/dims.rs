//! Structured grid dimensions and the row-major linearisation.

use crate::error::GridError;
use std::fmt;

/// Logical dimensions `(nx, ny, nz)` of a structured grid.
///
/// Global cell indices are row-major with `i` fastest:
/// `g = i + j*nx + k*nx*ny`. All dimensions are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridDims {
    /// Validate and create grid dimensions.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::EmptyDimension {
                dims: (nx, ny, nz),
            });
        }
        Ok(Self { nx, ny, nz })
    }

    /// Cells along `i`.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along `j`.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cells along `k`.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Total number of cells, active or not.
    pub fn cartesian_size(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Linear index of `(i, j, k)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside the grid.
    pub fn global_index(&self, i: usize, j: usize, k: usize) -> usize {
        assert!(
            i < self.nx && j < self.ny && k < self.nz,
            "cell ({i}, {j}, {k}) outside grid {self}"
        );
        i + j * self.nx + k * self.nx * self.ny
    }

    /// Inverse of [`global_index`](Self::global_index).
    ///
    /// # Panics
    ///
    /// Panics if `g` is not below the cartesian size.
    pub fn ijk(&self, g: usize) -> (usize, usize, usize) {
        assert!(
            g < self.cartesian_size(),
            "global index {g} outside grid {self}"
        );
        let layer = self.nx * self.ny;
        (g % self.nx, (g % layer) / self.nx, g / layer)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            GridDims::new(4, 0, 2),
            Err(GridError::EmptyDimension { dims: (4, 0, 2) })
        );
    }

    #[test]
    fn row_major_layout() {
        let dims = GridDims::new(5, 5, 4).unwrap();
        assert_eq!(dims.cartesian_size(), 100);
        assert_eq!(dims.global_index(1, 0, 0), 1);
        assert_eq!(dims.global_index(0, 1, 0), 5);
        assert_eq!(dims.global_index(0, 0, 1), 25);
        assert_eq!(dims.global_index(4, 4, 3), 99);
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn out_of_range_ijk_panics() {
        GridDims::new(2, 2, 2).unwrap().global_index(2, 0, 0);
    }

    proptest! {
        #[test]
        fn ijk_inverts_global_index(nx in 1usize..8, ny in 1usize..8, nz in 1usize..8, seed in 0usize..512) {
            let dims = GridDims::new(nx, ny, nz).unwrap();
            let g = seed % dims.cartesian_size();
            let (i, j, k) = dims.ijk(g);
            prop_assert_eq!(dims.global_index(i, j, k), g);
        }
    }
}
