//! The resolved state of one deck.

use std::error::Error;
use std::fmt;

use crate::aquifer::AquiferCt;
use crate::config::{ConfigError, ResolveConfig};
use crate::processor::{validate_properties, PropertyProcessor};
use strata_core::{Deck, DeckError, TableSource, UnitSystem};
use strata_grid::StructuredGrid;
use strata_props::GridPropertySet;
use tracing::debug;

/// Errors from [`DeckState::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub enum ResolveError {
    /// The configuration failed validation; no deck data was read.
    Config(ConfigError),
    /// Processing, validation or extraction failed.
    Deck(DeckError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Deck(e) => write!(f, "deck: {e}"),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Deck(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ResolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DeckError> for ResolveError {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}

/// Grid properties, aquifers and unit system of a resolved deck.
///
/// Built once by [`resolve`](Self::resolve) and read-only afterwards.
#[derive(Clone, Debug)]
pub struct DeckState {
    properties: GridPropertySet,
    aquifers: AquiferCt,
    unit_system: UnitSystem,
}

impl DeckState {
    /// Resolve `deck` over `grid`.
    ///
    /// Validates `config`, applies the deck's property keywords, checks the
    /// result, then extracts aquifers with influence tables from `tables`.
    pub fn resolve(
        deck: &Deck,
        grid: &dyn StructuredGrid,
        tables: &dyn TableSource,
        config: &ResolveConfig,
    ) -> Result<Self, ResolveError> {
        config.validate()?;

        let dims = grid.dims();
        let mut properties = GridPropertySet::new(dims);
        PropertyProcessor::new(dims).process(deck, &mut properties)?;
        validate_properties(deck, &properties, grid, config)?;

        let unit_system = UnitSystem::from_deck(deck, config.default_unit_system);
        let aquifers = AquiferCt::from_deck(deck, tables, config.default_unit_system)?;

        debug!(
            grid = %dims,
            active = grid.active_count(),
            int_properties = properties.ints().len(),
            double_properties = properties.doubles().len(),
            aquifers = aquifers.len(),
            %unit_system,
            "resolved deck"
        );
        Ok(Self {
            properties,
            aquifers,
            unit_system,
        })
    }

    /// Resolved grid properties.
    pub fn properties(&self) -> &GridPropertySet {
        &self.properties
    }

    /// Carter-Tracy aquifers.
    pub fn aquifers(&self) -> &AquiferCt {
        &self.aquifers
    }

    /// Unit system the deck declares, or the configured fallback.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
}
