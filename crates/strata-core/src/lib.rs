//! Core types for the Strata deck resolution workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! in-memory shape a deck tokenizer hands over (keywords, records, items),
//! supported-keyword descriptors, the unit-system enumeration, the table
//! collection seam, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod keyword;
pub mod table;
pub mod units;

pub use deck::{Deck, DeckItem, DeckKeyword, DeckRecord, Dimension, ItemValues};
pub use error::{DeckError, ErrorKind};
pub use keyword::KeywordDescriptor;
pub use table::{Table, TableCollection, TableSource};
pub use units::UnitSystem;
