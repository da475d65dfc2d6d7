//! Deck resolution for Strata.
//!
//! Turns a tokenized [`Deck`](strata_core::Deck) into an immutable
//! [`DeckState`]:
//!
//! - [`PropertyProcessor`] applies data keywords, `BOX`/`ENDBOX`, and the
//!   edit keywords to a [`GridPropertySet`](strata_props::GridPropertySet).
//! - [`validate_properties`] checks region numbers and required
//!   properties.
//! - [`AquiferCt`] extracts Carter-Tracy aquifers from `AQUCT`.
//!
//! [`ResolveConfig`] carries the knobs for all three.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aquifer;
pub mod config;
pub mod processor;
pub mod state;

pub use aquifer::{AquiferCt, AquiferRecord};
pub use config::{ConfigError, ResolveConfig};
pub use processor::{validate_properties, EditOp, PropertyProcessor};
pub use state::{DeckState, ResolveError};
