//! Strata: reservoir deck property resolution.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let deck: Deck = [
//!     DeckKeyword::new("METRIC"),
//!     DeckKeyword::data("PORO", DeckItem::double("data", vec![0.2; 8])),
//!     DeckKeyword::data("SATNUM", DeckItem::int("data", vec![1, 1, 1, 1, 2, 2, 2, 2])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let grid = ActiveMap::all_active(GridDims::new(2, 2, 2).unwrap());
//! let state = DeckState::resolve(
//!     &deck,
//!     &grid,
//!     &TableCollection::new(),
//!     &ResolveConfig::default(),
//! )
//! .unwrap();
//!
//! let satnum = state.properties().int_property("SATNUM").unwrap();
//! assert_eq!(satnum.index_equal(2), vec![4, 5, 6, 7]);
//! assert!(state.properties().has_deck_double_property("PORO").unwrap());
//! assert_eq!(state.unit_system(), UnitSystem::Metric);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Deck shape, descriptors, tables, units, errors |
//! | [`grid`] | `strata-grid` | Grid dimensions, cell boxes, active-cell mapping |
//! | [`props`] | `strata-props` | Typed grid properties and registries |
//! | [`state`] | `strata-state` | Deck processing, aquifers, resolved state |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Deck shape, keyword descriptors, tables, and errors (`strata-core`).
pub use strata_core as types;

/// Grid indexing (`strata-grid`).
///
/// [`grid::CellBox`] scopes bulk edits; [`grid::ActiveIndexMap`] is the
/// global ↔ active mapping consumed from the grid geometry.
pub use strata_grid as grid;

/// Typed per-cell properties (`strata-props`).
pub use strata_props as props;

/// Deck resolution (`strata-state`).
///
/// [`state::DeckState::resolve`] is the one-shot entry point;
/// [`state::PropertyProcessor`] and [`state::AquiferCt`] are usable on
/// their own.
pub use strata_state as state;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Deck shape
    pub use strata_core::{Deck, DeckItem, DeckKeyword, DeckRecord, KeywordDescriptor};

    // Tables and units
    pub use strata_core::{Table, TableCollection, TableSource, UnitSystem};

    // Errors
    pub use strata_core::{DeckError, ErrorKind};

    // Grid
    pub use strata_grid::{ActiveIndexMap, ActiveMap, CellBox, GridDims, StructuredGrid};

    // Properties
    pub use strata_props::{GridProperties, GridProperty, GridPropertySet, GridValue};

    // Resolution
    pub use strata_state::{AquiferCt, AquiferRecord, DeckState, ResolveConfig, ResolveError};
}
