//! Integer and floating registries over one grid.

use crate::property::GridProperty;
use crate::registry::GridProperties;
use crate::supported;
use std::fmt;
use strata_core::{DeckError, KeywordDescriptor};
use strata_grid::GridDims;

/// Element type a keyword is registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Integer (region numbers, flags).
    Int,
    /// Floating (physical quantities).
    Double,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// The resolved 3D properties of a deck: one integer and one floating
/// registry sharing grid dimensions.
#[derive(Clone, Debug)]
pub struct GridPropertySet {
    ints: GridProperties<i32>,
    doubles: GridProperties<f64>,
}

impl GridPropertySet {
    /// Registries over the built-in keyword tables.
    pub fn new(dims: GridDims) -> Self {
        Self::with_keywords(dims, supported::int_keywords(), supported::double_keywords())
    }

    /// Registries over caller-provided keyword tables.
    pub fn with_keywords(
        dims: GridDims,
        ints: impl IntoIterator<Item = KeywordDescriptor<i32>>,
        doubles: impl IntoIterator<Item = KeywordDescriptor<f64>>,
    ) -> Self {
        Self {
            ints: GridProperties::new(dims, ints),
            doubles: GridProperties::new(dims, doubles),
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.ints.dims()
    }

    /// Which registry supports `name`, if any. Integer wins a tie.
    pub fn kind_of(&self, name: &str) -> Option<PropertyKind> {
        if self.ints.supports(name) {
            Some(PropertyKind::Int)
        } else if self.doubles.supports(name) {
            Some(PropertyKind::Double)
        } else {
            None
        }
    }

    /// Whether the integer property `name` exists and was written from the deck.
    ///
    /// `LogicError` if `name` is not a supported integer keyword.
    pub fn has_deck_int_property(&self, name: &str) -> Result<bool, DeckError> {
        self.ints.has_deck(name)
    }

    /// Whether the floating property `name` exists and was written from the deck.
    ///
    /// `LogicError` if `name` is not a supported floating keyword.
    pub fn has_deck_double_property(&self, name: &str) -> Result<bool, DeckError> {
        self.doubles.has_deck(name)
    }

    /// Query-only integer lookup; see [`GridProperties::get`].
    pub fn int_property(&self, name: &str) -> Result<&GridProperty<i32>, DeckError> {
        self.ints.get(name)
    }

    /// Query-only floating lookup; see [`GridProperties::get`].
    pub fn double_property(&self, name: &str) -> Result<&GridProperty<f64>, DeckError> {
        self.doubles.get(name)
    }

    /// The integer registry.
    pub fn ints(&self) -> &GridProperties<i32> {
        &self.ints
    }

    /// The floating registry.
    pub fn doubles(&self) -> &GridProperties<f64> {
        &self.doubles
    }

    /// The integer registry, mutably.
    pub fn ints_mut(&mut self) -> &mut GridProperties<i32> {
        &mut self.ints
    }

    /// The floating registry, mutably.
    pub fn doubles_mut(&mut self) -> &mut GridProperties<f64> {
        &mut self.doubles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ErrorKind;

    fn set() -> GridPropertySet {
        GridPropertySet::new(GridDims::new(3, 3, 3).unwrap())
    }

    #[test]
    fn wrong_type_queries_are_logic_errors() {
        let props = set();
        assert_eq!(
            props.has_deck_int_property("ISWU").unwrap_err().kind(),
            ErrorKind::LogicError
        );
        assert_eq!(
            props.has_deck_double_property("FLUXNUM").unwrap_err().kind(),
            ErrorKind::LogicError
        );
        assert!(!props.has_deck_double_property("ISWU").unwrap());
        assert!(!props.has_deck_int_property("FLUXNUM").unwrap());
    }

    #[test]
    fn kind_of_builtin_keywords() {
        let props = set();
        assert_eq!(props.kind_of("SATNUM"), Some(PropertyKind::Int));
        assert_eq!(props.kind_of("PORO"), Some(PropertyKind::Double));
        assert_eq!(props.kind_of("GRID"), None);
    }

    #[test]
    fn typed_lookup_never_allocates() {
        let mut props = set();
        assert!(props.int_property("SATNUM").is_err());
        assert!(!props.ints().has("SATNUM"));
        props.ints_mut().add("SATNUM").unwrap();
        assert_eq!(props.int_property("SATNUM").unwrap().get(0), 1);
        assert_eq!(
            props.double_property("SATNUM").unwrap_err().kind(),
            ErrorKind::LogicError
        );
    }
}
