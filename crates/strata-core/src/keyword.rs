//! Supported-keyword descriptors.

/// Declares that a keyword may exist in a property registry.
///
/// Carries the fill value used when the keyword is absent or only partially
/// set, the keyword's physical unit, and whether repeated deck loads
/// accumulate (`additive`) instead of overwriting.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordDescriptor<T> {
    name: String,
    default_value: T,
    unit: String,
    additive: bool,
}

impl<T: Copy> KeywordDescriptor<T> {
    /// A non-additive descriptor.
    pub fn new(name: impl Into<String>, default_value: T, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value,
            unit: unit.into(),
            additive: false,
        }
    }

    /// An additive descriptor: repeated deck loads add to existing values.
    pub fn additive(name: impl Into<String>, default_value: T, unit: impl Into<String>) -> Self {
        Self {
            additive: true,
            ..Self::new(name, default_value, unit)
        }
    }

    /// Keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fill value for cells not set from the deck.
    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// Physical unit string (e.g. `"1"`, `"Length"`).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether repeated loads accumulate.
    pub fn is_additive(&self) -> bool {
        self.additive
    }
}
