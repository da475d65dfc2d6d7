//! Structured grid indexing for Strata.
//!
//! This crate defines the index-space vocabulary every property operation
//! is expressed in:
//!
//! - [`GridDims`]: `(nx, ny, nz)` and the row-major global index
//!   `g = i + j*nx + k*nx*ny`.
//! - [`CellBox`]: inclusive index boxes, whole-grid or nested, iterated in
//!   canonical `i`-fastest order.
//! - [`ActiveIndexMap`] / [`StructuredGrid`]: the global ↔ active mapping
//!   consumed from the grid geometry, with [`ActiveMap`] as the concrete
//!   table-backed implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod active;
pub mod cell_box;
pub mod dims;
pub mod error;

pub use active::{ActiveIndexMap, ActiveMap, StructuredGrid};
pub use cell_box::{CellBox, CellBoxIter};
pub use dims::GridDims;
pub use error::GridError;
