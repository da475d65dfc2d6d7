//! Error types for deck resolution.
//!
//! Every failure is a [`DeckError`] variant. Variants are classified into
//! two kinds by [`DeckError::kind`] so callers can branch on
//! recoverable-vs-fatal without inspecting message text:
//!
//! - [`ErrorKind::InvalidArgument`]: bad data or usage (wrong record size,
//!   out-of-limit values, unsupported keyword on creation, malformed records).
//! - [`ErrorKind::LogicError`]: the calling code asked about a keyword that
//!   was never declared as supported.

use std::error::Error;
use std::fmt;

/// Classification of a [`DeckError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Data or usage error. Expected in normal operation and recoverable.
    InvalidArgument,
    /// Schema or programmer error: the question itself was invalid.
    LogicError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::LogicError => write!(f, "logic error"),
        }
    }
}

/// Errors from property stores, registries, and record extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A keyword or record was expected to carry literal per-cell data but
    /// does not.
    NotData {
        /// Keyword or property name.
        name: String,
    },
    /// A value sequence or a second operand has the wrong length.
    SizeMismatch {
        /// Keyword or property name.
        name: String,
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// A cell value lies outside the permitted `[min, max]` range.
    OutOfLimits {
        /// Property name.
        name: String,
        /// Global index of the first offending cell.
        cell: usize,
        /// The offending value, formatted.
        value: String,
        /// Lower limit, formatted.
        min: String,
        /// Upper limit, formatted.
        max: String,
    },
    /// An edit or accumulating load would overflow the element type.
    Overflow {
        /// Property name.
        name: String,
        /// Global index of the first offending cell.
        cell: usize,
        /// The cell value before the edit, formatted.
        value: String,
        /// The operand, formatted.
        operand: String,
    },
    /// Creation of a keyword that is not in the supported table.
    UnsupportedKeyword {
        /// The requested name.
        name: String,
    },
    /// The keyword is supported but no property has been created for it.
    NotPresent {
        /// The requested name.
        name: String,
    },
    /// The property exists but was never written from the deck.
    NotFromDeck {
        /// The requested name.
        name: String,
    },
    /// A record does not contain an item of the given name.
    MissingItem {
        /// Item name.
        item: String,
    },
    /// An item holds fewer values than the requested position.
    MissingValue {
        /// Item name.
        item: String,
        /// Requested position.
        index: usize,
    },
    /// An item's values are of a different type than requested.
    WrongValueType {
        /// Item name.
        item: String,
        /// The type that was requested.
        expected: &'static str,
    },
    /// A record of a multi-record keyword could not be bound to its
    /// domain structure.
    MalformedRecord {
        /// Keyword name.
        keyword: String,
        /// Zero-based record position within the keyword.
        record: usize,
        /// What went wrong.
        reason: String,
    },
    /// A table id references a table that does not exist.
    MissingTable {
        /// The 1-based table id as written in the deck.
        table_id: i32,
        /// Number of tables available.
        available: usize,
    },
    /// A grid dimension or box is invalid.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// A required property still holds the unset sentinel in active cells.
    UnsetCells {
        /// Property name.
        name: String,
        /// Number of active cells left unset.
        count: usize,
    },
    /// A query named a keyword that was never declared as supported.
    UndeclaredKeyword {
        /// The requested name.
        name: String,
    },
}

impl DeckError {
    /// Classify this error as a data error or a programmer error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UndeclaredKeyword { .. } => ErrorKind::LogicError,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Shorthand for `self.kind() == ErrorKind::LogicError`.
    pub fn is_logic_error(&self) -> bool {
        self.kind() == ErrorKind::LogicError
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotData { name } => write!(f, "'{name}' does not hold literal data values"),
            Self::SizeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "size mismatch for '{name}': expected {expected} values, got {actual}"
            ),
            Self::OutOfLimits {
                name,
                cell,
                value,
                min,
                max,
            } => write!(
                f,
                "'{name}' value {value} at cell {cell} outside limits [{min}, {max}]"
            ),
            Self::Overflow {
                name,
                cell,
                value,
                operand,
            } => write!(
                f,
                "'{name}' value {value} at cell {cell} overflows with operand {operand}"
            ),
            Self::UnsupportedKeyword { name } => write!(f, "keyword '{name}' is not supported"),
            Self::NotPresent { name } => write!(f, "keyword '{name}' has not been created"),
            Self::NotFromDeck { name } => {
                write!(f, "keyword '{name}' was not assigned from the deck")
            }
            Self::MissingItem { item } => write!(f, "record has no item '{item}'"),
            Self::MissingValue { item, index } => {
                write!(f, "item '{item}' has no value at position {index}")
            }
            Self::WrongValueType { item, expected } => {
                write!(f, "item '{item}' does not hold {expected} values")
            }
            Self::MalformedRecord {
                keyword,
                record,
                reason,
            } => write!(f, "malformed {keyword} record {record}: {reason}"),
            Self::MissingTable {
                table_id,
                available,
            } => write!(
                f,
                "table {table_id} referenced but only {available} tables available"
            ),
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::UnsetCells { name, count } => {
                write!(f, "'{name}' is unset in {count} active cells")
            }
            Self::UndeclaredKeyword { name } => {
                write!(f, "keyword '{name}' was never declared as supported")
            }
        }
    }
}

impl Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_undeclared_keyword_is_a_logic_error() {
        let logic = DeckError::UndeclaredKeyword {
            name: "FLUXNUM".into(),
        };
        assert_eq!(logic.kind(), ErrorKind::LogicError);
        assert!(logic.is_logic_error());

        let data = DeckError::UnsupportedKeyword {
            name: "FLUXNUM".into(),
        };
        assert_eq!(data.kind(), ErrorKind::InvalidArgument);
        assert!(data.is_invalid_argument());
    }

    #[test]
    fn overflow_names_cell_and_operand() {
        let err = DeckError::Overflow {
            name: "FIPNUM".into(),
            cell: 3,
            value: "2147483647".into(),
            operand: "1".into(),
        };
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "'FIPNUM' value 2147483647 at cell 3 overflows with operand 1"
        );
    }

    #[test]
    fn display_names_the_offender() {
        let err = DeckError::SizeMismatch {
            name: "SATNUM".into(),
            expected: 15,
            actual: 32,
        };
        assert_eq!(
            err.to_string(),
            "size mismatch for 'SATNUM': expected 15 values, got 32"
        );
    }
}
