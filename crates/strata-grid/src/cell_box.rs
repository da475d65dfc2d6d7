//! Axis-aligned index boxes scoping bulk property mutation.

use crate::dims::GridDims;
use crate::error::GridError;
use std::iter::FusedIterator;

/// An inclusive, zero-based index box `(i1..=i2, j1..=j2, k1..=k2)` within
/// a structured grid.
///
/// Boxes are either the whole grid ([`CellBox::whole`]) or nested inside
/// another box ([`CellBox::subrange`]); nesting checks containment in the
/// parent only. [`global_indices`](CellBox::global_indices) yields cells in
/// the canonical order every bulk operator uses: `i` fastest, `k` slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBox {
    dims: GridDims,
    lower: [usize; 3],
    upper: [usize; 3],
}

impl CellBox {
    /// Box spanning a whole `nx × ny × nz` grid.
    pub fn full(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        GridDims::new(nx, ny, nz).map(Self::whole)
    }

    /// Box spanning the whole grid of `dims`.
    pub fn whole(dims: GridDims) -> Self {
        Self {
            dims,
            lower: [0, 0, 0],
            upper: [dims.nx() - 1, dims.ny() - 1, dims.nz() - 1],
        }
    }

    /// A box nested inside `self`, with zero-based inclusive bounds.
    pub fn subrange(
        &self,
        i1: usize,
        i2: usize,
        j1: usize,
        j2: usize,
        k1: usize,
        k2: usize,
    ) -> Result<Self, GridError> {
        let bounds = [i1, i2, j1, j2, k1, k2];
        if i1 > i2 || j1 > j2 || k1 > k2 {
            return Err(GridError::InvertedBox { bounds });
        }
        let lower = [i1, j1, k1];
        let upper = [i2, j2, k2];
        let inside = (0..3).all(|axis| lower[axis] >= self.lower[axis] && upper[axis] <= self.upper[axis]);
        if !inside {
            return Err(GridError::BoxOutOfBounds {
                bounds,
                parent: format!("{:?}", self.bounds()),
            });
        }
        Ok(Self {
            dims: self.dims,
            lower,
            upper,
        })
    }

    /// A nested box from deck-style 1-based bounds `[I1, I2, J1, J2, K1, K2]`.
    ///
    /// `None` entries take the corresponding bound of `self`, the way a
    /// defaulted box item falls back to the current input box.
    pub fn from_one_based(&self, bounds: [Option<usize>; 6]) -> Result<Self, GridError> {
        const AXES: [&str; 6] = ["I1", "I2", "J1", "J2", "K1", "K2"];
        let current = self.bounds();
        let mut resolved = [0usize; 6];
        for (slot, ((bound, fallback), axis)) in resolved
            .iter_mut()
            .zip(bounds.iter().zip(current).zip(AXES))
        {
            *slot = match *bound {
                Some(0) => return Err(GridError::ZeroOneBasedBound { axis }),
                Some(b) => b - 1,
                None => fallback,
            };
        }
        let [i1, i2, j1, j2, k1, k2] = resolved;
        self.subrange(i1, i2, j1, j2, k1, k2)
    }

    /// Dimensions of the grid this box lives in.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Zero-based inclusive bounds `[i1, i2, j1, j2, k1, k2]`.
    pub fn bounds(&self) -> [usize; 6] {
        [
            self.lower[0],
            self.upper[0],
            self.lower[1],
            self.upper[1],
            self.lower[2],
            self.upper[2],
        ]
    }

    /// Extent along `i`.
    pub fn nx(&self) -> usize {
        self.upper[0] - self.lower[0] + 1
    }

    /// Extent along `j`.
    pub fn ny(&self) -> usize {
        self.upper[1] - self.lower[1] + 1
    }

    /// Extent along `k`.
    pub fn nz(&self) -> usize {
        self.upper[2] - self.lower[2] + 1
    }

    /// Number of cells in the box.
    pub fn size(&self) -> usize {
        self.nx() * self.ny() * self.nz()
    }

    /// Returns `true` if the box covers the whole grid.
    pub fn is_global(&self) -> bool {
        self.size() == self.dims.cartesian_size()
    }

    /// Returns `true` if `(i, j, k)` lies inside the box.
    pub fn contains_ijk(&self, i: usize, j: usize, k: usize) -> bool {
        let p = [i, j, k];
        (0..3).all(|axis| p[axis] >= self.lower[axis] && p[axis] <= self.upper[axis])
    }

    /// Returns `true` if global index `g` lies inside the box.
    pub fn contains(&self, g: usize) -> bool {
        if g >= self.dims.cartesian_size() {
            return false;
        }
        let (i, j, k) = self.dims.ijk(g);
        self.contains_ijk(i, j, k)
    }

    /// Global indices of the box cells in canonical order.
    ///
    /// The iterator is `Clone`, so a sequence can be restarted.
    pub fn global_indices(&self) -> CellBoxIter {
        CellBoxIter {
            cell_box: *self,
            cursor: self.lower,
            remaining: self.size(),
        }
    }
}

impl IntoIterator for CellBox {
    type Item = usize;
    type IntoIter = CellBoxIter;

    fn into_iter(self) -> Self::IntoIter {
        self.global_indices()
    }
}

/// Iterator over the global indices of a [`CellBox`], `i` fastest.
#[derive(Clone, Debug)]
pub struct CellBoxIter {
    cell_box: CellBox,
    cursor: [usize; 3],
    remaining: usize,
}

impl Iterator for CellBoxIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let [i, j, k] = self.cursor;
        let g = self.cell_box.dims.global_index(i, j, k);
        self.remaining -= 1;

        let (lower, upper) = (self.cell_box.lower, self.cell_box.upper);
        for axis in 0..3 {
            if self.cursor[axis] < upper[axis] {
                self.cursor[axis] += 1;
                break;
            }
            self.cursor[axis] = lower[axis];
        }
        Some(g)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellBoxIter {}

impl FusedIterator for CellBoxIter {}
