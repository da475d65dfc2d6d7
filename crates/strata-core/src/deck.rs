//! In-memory deck shape: keywords, records, and items.
//!
//! These are the structures a deck tokenizer produces. Nothing here parses
//! text; a [`Deck`] is an ordered list of [`DeckKeyword`]s, each holding
//! ordered [`DeckRecord`]s of named [`DeckItem`]s.

use crate::error::DeckError;
use smallvec::SmallVec;

/// Physical dimension of a floating item, as an affine map to SI.
///
/// `si = raw * si_scaling + si_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    name: String,
    si_scaling: f64,
    si_offset: f64,
}

impl Dimension {
    /// A dimension with a pure scaling to SI.
    pub fn new(name: impl Into<String>, si_scaling: f64) -> Self {
        Self {
            name: name.into(),
            si_scaling,
            si_offset: 0.0,
        }
    }

    /// Add an SI offset (e.g. for temperatures).
    pub fn with_offset(mut self, si_offset: f64) -> Self {
        self.si_offset = si_offset;
        self
    }

    /// The dimensionless identity mapping.
    pub fn identity() -> Self {
        Self::new("1", 1.0)
    }

    /// Dimension name as declared by the keyword schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Convert a raw deck value to SI.
    pub fn to_si(&self, raw: f64) -> f64 {
        raw * self.si_scaling + self.si_offset
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::identity()
    }
}

/// The typed value sequence held by a [`DeckItem`].
#[derive(Clone, Debug, PartialEq)]
pub enum ItemValues {
    /// Integer values.
    Int(Vec<i32>),
    /// Floating values in raw (deck) units.
    Double(Vec<f64>),
    /// String values.
    Str(Vec<String>),
}

impl ItemValues {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named item of a record.
///
/// Every value position carries a "default applied" flag, set by the
/// tokenizer when the deck left that position unspecified (e.g. `*` or a
/// truncated record) and the schema default was filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckItem {
    name: String,
    values: ItemValues,
    defaulted: Vec<bool>,
    dimension: Dimension,
}

impl DeckItem {
    /// Create an item with no defaulted positions and identity dimension.
    pub fn new(name: impl Into<String>, values: ItemValues) -> Self {
        let defaulted = vec![false; values.len()];
        Self {
            name: name.into(),
            values,
            defaulted,
            dimension: Dimension::identity(),
        }
    }

    /// Integer item.
    pub fn int(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self::new(name, ItemValues::Int(values))
    }

    /// Floating item.
    pub fn double(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, ItemValues::Double(values))
    }

    /// String item.
    pub fn string<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            ItemValues::Str(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Attach the item's physical dimension.
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Replace the per-value defaulted flags.
    ///
    /// # Panics
    ///
    /// Panics if `defaulted` does not have one flag per value.
    pub fn with_defaulted(mut self, defaulted: Vec<bool>) -> Self {
        assert_eq!(
            defaulted.len(),
            self.values.len(),
            "defaulted flags for item '{}' must match its value count",
            self.name,
        );
        self.defaulted = defaulted;
        self
    }

    /// Mark every position as defaulted.
    pub fn all_defaulted(mut self) -> Self {
        self.defaulted.iter_mut().for_each(|d| *d = true);
        self
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value sequence.
    pub fn values(&self) -> &ItemValues {
        &self.values
    }

    /// The item's dimension.
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the item holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), DeckError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(DeckError::MissingValue {
                item: self.name.clone(),
                index,
            })
        }
    }

    /// Integer value at `index`.
    pub fn get_int(&self, index: usize) -> Result<i32, DeckError> {
        self.check_index(index)?;
        match &self.values {
            ItemValues::Int(v) => Ok(v[index]),
            _ => Err(DeckError::WrongValueType {
                item: self.name.clone(),
                expected: "integer",
            }),
        }
    }

    /// Raw floating value at `index`. Integer items widen.
    pub fn get_double(&self, index: usize) -> Result<f64, DeckError> {
        self.check_index(index)?;
        match &self.values {
            ItemValues::Double(v) => Ok(v[index]),
            ItemValues::Int(v) => Ok(f64::from(v[index])),
            ItemValues::Str(_) => Err(DeckError::WrongValueType {
                item: self.name.clone(),
                expected: "numeric",
            }),
        }
    }

    /// Floating value at `index`, converted to SI with the item's dimension.
    pub fn get_si_double(&self, index: usize) -> Result<f64, DeckError> {
        self.get_double(index).map(|raw| self.dimension.to_si(raw))
    }

    /// String value at `index`.
    pub fn get_string(&self, index: usize) -> Result<&str, DeckError> {
        self.check_index(index)?;
        match &self.values {
            ItemValues::Str(v) => Ok(&v[index]),
            _ => Err(DeckError::WrongValueType {
                item: self.name.clone(),
                expected: "string",
            }),
        }
    }

    /// Whether the value at `index` was filled from the schema default.
    pub fn default_applied(&self, index: usize) -> Result<bool, DeckError> {
        self.check_index(index)?;
        Ok(self.defaulted[index])
    }
}

/// One record of a keyword: an ordered list of named items.
///
/// A *data record* holds a single item of literal per-cell values, as
/// produced for grid property keywords such as `SATNUM` or `PORO`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckRecord {
    items: SmallVec<[DeckItem; 4]>,
    data: bool,
}

impl DeckRecord {
    /// Create an empty, non-data record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data record holding `item`.
    pub fn data(item: DeckItem) -> Self {
        let mut items = SmallVec::new();
        items.push(item);
        Self { items, data: true }
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_item(mut self, item: DeckItem) -> Self {
        self.push(item);
        self
    }

    /// Append an item.
    pub fn push(&mut self, item: DeckItem) {
        self.items.push(item);
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Result<&DeckItem, DeckError> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .ok_or_else(|| DeckError::MissingItem { item: name.into() })
    }

    /// Item at a position.
    pub fn item_at(&self, index: usize) -> Option<&DeckItem> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the record holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if this is a data record.
    pub fn is_data_record(&self) -> bool {
        self.data && self.items.len() == 1
    }

    /// The literal data item, if this is a data record.
    pub fn data_item(&self) -> Option<&DeckItem> {
        if self.is_data_record() {
            self.items.first()
        } else {
            None
        }
    }

    /// Iterate over items in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckItem> {
        self.items.iter()
    }
}

/// A keyword occurrence with its records.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckKeyword {
    name: String,
    records: Vec<DeckRecord>,
}

impl DeckKeyword {
    /// Create a keyword with no records (e.g. `ENDBOX`, `FIELD`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Create a data keyword whose single record holds `item`.
    pub fn data(name: impl Into<String>, item: DeckItem) -> Self {
        Self::new(name).with_record(DeckRecord::data(item))
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_record(mut self, record: DeckRecord) -> Self {
        self.push(record);
        self
    }

    /// Append a record.
    pub fn push(&mut self, record: DeckRecord) {
        self.records.push(record);
    }

    /// Keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All records in deck order.
    pub fn records(&self) -> &[DeckRecord] {
        &self.records
    }

    /// Record at a position.
    pub fn record(&self, index: usize) -> Option<&DeckRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the keyword has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if this keyword is a single data record.
    pub fn is_data_keyword(&self) -> bool {
        self.records.len() == 1 && self.records[0].is_data_record()
    }

    /// Iterate over records in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a DeckKeyword {
    type Item = &'a DeckRecord;
    type IntoIter = std::slice::Iter<'a, DeckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ordered sequence of keywords.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    keywords: Vec<DeckKeyword>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_keyword(mut self, keyword: DeckKeyword) -> Self {
        self.push(keyword);
        self
    }

    /// Append a keyword.
    pub fn push(&mut self, keyword: DeckKeyword) {
        self.keywords.push(keyword);
    }

    /// Returns `true` if at least one keyword of this name is present.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|kw| kw.name() == name)
    }

    /// The last occurrence of the named keyword.
    pub fn keyword(&self, name: &str) -> Option<&DeckKeyword> {
        self.keywords.iter().rev().find(|kw| kw.name() == name)
    }

    /// All occurrences of the named keyword, in deck order.
    pub fn keywords_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DeckKeyword> {
        self.keywords.iter().filter(move |kw| kw.name() == name)
    }

    /// Number of occurrences of the named keyword.
    pub fn count(&self, name: &str) -> usize {
        self.keywords_named(name).count()
    }

    /// Iterate over all keywords in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckKeyword> {
        self.keywords.iter()
    }

    /// Total number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` if the deck holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl FromIterator<DeckKeyword> for Deck {
    fn from_iter<I: IntoIterator<Item = DeckKeyword>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a DeckKeyword;
    type IntoIter = std::slice::Iter<'a, DeckKeyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
