//! Name → property registry over a fixed set of supported keywords.

use crate::property::GridProperty;
use crate::value::GridValue;
use indexmap::IndexMap;
use strata_core::{DeckError, KeywordDescriptor};
use strata_grid::GridDims;
use tracing::trace;

/// Registry of [`GridProperty`] values of one element type.
///
/// The supported table is fixed at construction. Properties are allocated
/// lazily: [`has`](Self::has) is `false` for a supported keyword until
/// something materializes it through [`get_or_create`](Self::get_or_create),
/// [`add`](Self::add) or [`assert_present`](Self::assert_present).
///
/// Both tables use `IndexMap` so [`iter`](Self::iter) yields properties in
/// materialization order.
#[derive(Clone, Debug)]
pub struct GridProperties<T: GridValue> {
    dims: GridDims,
    supported: IndexMap<String, KeywordDescriptor<T>>,
    properties: IndexMap<String, GridProperty<T>>,
}

impl<T: GridValue> GridProperties<T> {
    /// Create an empty registry.
    ///
    /// A later descriptor with a repeated name replaces the earlier one.
    pub fn new(dims: GridDims, supported: impl IntoIterator<Item = KeywordDescriptor<T>>) -> Self {
        let supported = supported
            .into_iter()
            .map(|d| (d.name().to_string(), d))
            .collect();
        Self {
            dims,
            supported,
            properties: IndexMap::new(),
        }
    }

    /// Grid every property of this registry covers.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Whether `name` may be materialized in this registry.
    pub fn supports(&self, name: &str) -> bool {
        self.supported.contains_key(name)
    }

    /// Whether a property named `name` has been materialized.
    pub fn has(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Descriptor for a supported keyword.
    pub fn descriptor(&self, name: &str) -> Option<&KeywordDescriptor<T>> {
        self.supported.get(name)
    }

    fn supported_descriptor(&self, name: &str) -> Result<&KeywordDescriptor<T>, DeckError> {
        self.supported
            .get(name)
            .ok_or_else(|| DeckError::UnsupportedKeyword { name: name.into() })
    }

    /// The property for `name`, allocating it at default values first if
    /// needed. After a successful call [`has`](Self::has) is `true`.
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut GridProperty<T>, DeckError> {
        if !self.properties.contains_key(name) {
            let descriptor = self.supported_descriptor(name)?.clone();
            trace!(keyword = name, cells = self.dims.cartesian_size(), "allocating property");
            self.properties
                .insert(name.to_string(), GridProperty::new(self.dims, descriptor));
        }
        self.properties
            .get_mut(name)
            .ok_or_else(|| DeckError::NotPresent { name: name.into() })
    }

    /// Materialize `name`. Returns `false` if it was already present.
    pub fn add(&mut self, name: &str) -> Result<bool, DeckError> {
        if self.has(name) {
            return Ok(false);
        }
        self.get_or_create(name)?;
        Ok(true)
    }

    /// Ensure `name` is supported and present, creating it if needed.
    pub fn assert_present(&mut self, name: &str) -> Result<(), DeckError> {
        self.get_or_create(name).map(|_| ())
    }

    fn declared(&self, name: &str) -> Result<(), DeckError> {
        if self.supports(name) {
            Ok(())
        } else {
            Err(DeckError::UndeclaredKeyword { name: name.into() })
        }
    }

    /// Query-only retrieval; never allocates.
    ///
    /// `LogicError` if `name` was never declared, `InvalidArgument` if it is
    /// declared but not yet materialized.
    pub fn get(&self, name: &str) -> Result<&GridProperty<T>, DeckError> {
        self.declared(name)?;
        self.properties
            .get(name)
            .ok_or_else(|| DeckError::NotPresent { name: name.into() })
    }

    /// Mutable query-only retrieval, with the same failures as [`get`](Self::get).
    pub fn get_mut(&mut self, name: &str) -> Result<&mut GridProperty<T>, DeckError> {
        self.declared(name)?;
        self.properties
            .get_mut(name)
            .ok_or_else(|| DeckError::NotPresent { name: name.into() })
    }

    /// Like [`get`](Self::get), and additionally `InvalidArgument` unless a
    /// deck keyword wrote to the property.
    pub fn get_deck(&self, name: &str) -> Result<&GridProperty<T>, DeckError> {
        let property = self.get(name)?;
        if property.is_deck_assigned() {
            Ok(property)
        } else {
            Err(DeckError::NotFromDeck { name: name.into() })
        }
    }

    /// Whether `name` exists and was written from the deck.
    ///
    /// `LogicError` if `name` was never declared.
    pub fn has_deck(&self, name: &str) -> Result<bool, DeckError> {
        self.declared(name)?;
        Ok(self
            .properties
            .get(name)
            .is_some_and(GridProperty::is_deck_assigned))
    }

    /// Materialized properties in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GridProperty<T>)> {
        self.properties.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Names of materialized properties in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of materialized properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if nothing has been materialized.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ErrorKind;

    fn registry() -> GridProperties<i32> {
        GridProperties::new(
            GridDims::new(10, 10, 100).unwrap(),
            [
                KeywordDescriptor::new("SATNUM", 0, "1"),
                KeywordDescriptor::new("FIPNUM", 2, "1"),
            ],
        )
    }

    #[test]
    fn starts_empty() {
        let props = registry();
        assert!(props.supports("SATNUM"));
        assert!(props.supports("FIPNUM"));
        assert!(!props.supports("FLUXNUM"));
        assert!(!props.has("SATNUM"));
        assert!(!props.has("FLUXNUM"));
        assert!(props.is_empty());
    }

    #[test]
    fn add_keyword() {
        let mut props = registry();
        let err = props.add("NOT-SUPPORTED").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(props.add("SATNUM").unwrap());
        assert!(!props.add("SATNUM").unwrap());
        assert!(props.has("SATNUM"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn assert_present_creates_supported_keyword() {
        let mut props = GridProperties::new(
            GridDims::new(10, 7, 9).unwrap(),
            [
                KeywordDescriptor::new("SATNUM", 0, "1"),
                KeywordDescriptor::new("FIPNUM", 0, "1"),
            ],
        );
        let err = props.assert_present("NOT-SUPPORTED").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!props.has("FIPNUM"));
        props.assert_present("FIPNUM").unwrap();
        assert!(props.has("FIPNUM"));
    }

    #[test]
    fn get_or_create_allocates_at_default() {
        let mut props = registry();
        let fipnum = props.get_or_create("FIPNUM").unwrap();
        assert_eq!(fipnum.cartesian_size(), 10_000);
        assert!(fipnum.data().iter().all(|&v| v == 2));
        assert!(props.has("FIPNUM"));
        assert!(props.get_or_create("PVTNUM").is_err());
    }

    #[test]
    fn get_distinguishes_undeclared_from_absent() {
        let mut props = registry();
        assert_eq!(props.get("NONONO").unwrap_err().kind(), ErrorKind::LogicError);
        assert_eq!(props.get("SATNUM").unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(!props.has("SATNUM"));
        props.add("SATNUM").unwrap();
        assert!(props.get("SATNUM").is_ok());
    }

    #[test]
    fn deck_queries() {
        let mut props = registry();
        assert_eq!(props.has_deck("NONONO").unwrap_err().kind(), ErrorKind::LogicError);
        assert!(!props.has_deck("SATNUM").unwrap());
        props.add("SATNUM").unwrap();
        assert!(!props.has_deck("SATNUM").unwrap());
        assert_eq!(
            props.get_deck("SATNUM").unwrap_err(),
            DeckError::NotFromDeck { name: "SATNUM".into() }
        );
        props.get_mut("SATNUM").unwrap().mark_deck_assigned();
        assert!(props.has_deck("SATNUM").unwrap());
        assert!(props.get_deck("SATNUM").is_ok());
    }

    #[test]
    fn iteration_follows_creation_order() {
        let mut props = registry();
        props.add("FIPNUM").unwrap();
        props.add("SATNUM").unwrap();
        let names: Vec<&str> = props.names().collect();
        assert_eq!(names, ["FIPNUM", "SATNUM"]);
        assert_eq!(props.iter().count(), 2);
    }
}
