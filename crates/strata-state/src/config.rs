//! Resolution configuration, validation, and error types.
//!
//! [`ResolveConfig`] is the input knob set for
//! [`DeckState::resolve`](crate::DeckState::resolve).
//! [`validate()`](ResolveConfig::validate) checks it before any deck data
//! is touched.

use std::error::Error;
use std::fmt;

use strata_core::UnitSystem;
use strata_props::supported;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ResolveConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required property is not a supported floating keyword.
    UnsupportedRequiredProperty {
        /// The configured name.
        name: String,
    },
    /// A required property is listed more than once.
    DuplicateRequiredProperty {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRequiredProperty { name } => {
                write!(f, "required property '{name}' is not a supported floating keyword")
            }
            Self::DuplicateRequiredProperty { name } => {
                write!(f, "required property '{name}' listed more than once")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ResolveConfig ──────────────────────────────────────────────────

/// Configuration for resolving a deck.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveConfig {
    /// Unit system assumed when the deck carries neither `FIELD` nor
    /// `METRIC`. Default: [`UnitSystem::Metric`].
    pub default_unit_system: UnitSystem,
    /// Check region numbers against `TABDIMS`/`EQLDIMS`. Default: `true`.
    pub check_region_limits: bool,
    /// Floating properties that must be set in every active cell.
    /// Default: `["PORO"]`.
    pub required_properties: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            default_unit_system: UnitSystem::Metric,
            check_region_limits: true,
            required_properties: vec!["PORO".to_string()],
        }
    }
}

impl ResolveConfig {
    /// Validate against the built-in keyword tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let doubles = supported::double_keywords();
        for (index, name) in self.required_properties.iter().enumerate() {
            if !doubles.iter().any(|d| d.name() == name) {
                return Err(ConfigError::UnsupportedRequiredProperty { name: name.clone() });
            }
            if self.required_properties[..index].contains(name) {
                return Err(ConfigError::DuplicateRequiredProperty { name: name.clone() });
            }
        }
        Ok(())
    }
}
