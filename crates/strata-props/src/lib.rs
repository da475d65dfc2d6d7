//! Typed per-cell grid properties for Strata.
//!
//! A [`GridProperty`] is a full-grid array of one keyword with per-cell
//! "defaulted" flags and box-scoped bulk operators. [`GridProperties`] is a
//! registry that materializes properties lazily from a fixed table of
//! supported [`KeywordDescriptor`](strata_core::KeywordDescriptor)s, and
//! [`GridPropertySet`] pairs an integer and a floating registry over one
//! grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod property;
pub mod registry;
pub mod set;
pub mod supported;
pub mod value;

pub use property::GridProperty;
pub use registry::GridProperties;
pub use set::{GridPropertySet, PropertyKind};
pub use value::GridValue;
