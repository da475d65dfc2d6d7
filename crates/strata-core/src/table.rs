//! Column tables referenced by id from deck records.
//!
//! Interpolation and lookup live in the table engine; this module only
//! carries column data and the [`TableSource`] seam extractors read through.

use crate::deck::DeckKeyword;
use crate::error::DeckError;

/// A table of equally long floating columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from columns.
    ///
    /// Fails with [`DeckError::SizeMismatch`] if the columns differ in length.
    pub fn new(columns: Vec<Vec<f64>>) -> Result<Self, DeckError> {
        if let Some(first) = columns.first() {
            let rows = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
                return Err(DeckError::SizeMismatch {
                    name: "table column".into(),
                    expected: rows,
                    actual: bad.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Build a table from row-major values with `num_columns` columns.
    pub fn from_rows(num_columns: usize, values: &[f64]) -> Result<Self, DeckError> {
        if num_columns == 0 || values.len() % num_columns != 0 {
            return Err(DeckError::SizeMismatch {
                name: "table rows".into(),
                expected: values.len().next_multiple_of(num_columns.max(1)),
                actual: values.len(),
            });
        }
        let mut columns = vec![Vec::with_capacity(values.len() / num_columns); num_columns];
        for row in values.chunks_exact(num_columns) {
            for (column, &value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Ok(Self { columns })
    }

    /// Column at a zero-based position.
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }
}

/// Read access to a collection of tables by zero-based position.
pub trait TableSource {
    /// Table at a zero-based position.
    fn table(&self, index: usize) -> Option<&Table>;

    /// Number of tables available.
    fn len(&self) -> usize;

    /// Returns `true` if no tables are available.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An owned, ordered list of tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCollection {
    tables: Vec<Table>,
}

impl TableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one table per record of a table keyword (e.g. `AQUTAB`).
    ///
    /// Each record must be a data record holding row-major values.
    pub fn from_keyword(keyword: &DeckKeyword, num_columns: usize) -> Result<Self, DeckError> {
        let mut tables = Vec::with_capacity(keyword.len());
        for (index, record) in keyword.iter().enumerate() {
            let item = record.data_item().ok_or_else(|| DeckError::MalformedRecord {
                keyword: keyword.name().into(),
                record: index,
                reason: "expected a single data item".into(),
            })?;
            let values = (0..item.len())
                .map(|i| item.get_si_double(i))
                .collect::<Result<Vec<_>, _>>()?;
            let table =
                Table::from_rows(num_columns, &values).map_err(|err| DeckError::MalformedRecord {
                    keyword: keyword.name().into(),
                    record: index,
                    reason: err.to_string(),
                })?;
            tables.push(table);
        }
        Ok(Self { tables })
    }

    /// Append a table.
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Iterate over tables in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }
}

impl TableSource for TableCollection {
    fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    fn len(&self) -> usize {
        self.tables.len()
    }
}

impl FromIterator<Table> for TableCollection {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckItem, DeckRecord};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn from_rows_preserves_every_value(
            num_columns in 1usize..6,
            rows in 0usize..20,
            seed in -1.0e3f64..1.0e3,
        ) {
            let values: Vec<f64> = (0..num_columns * rows).map(|i| seed + i as f64).collect();
            let table = Table::from_rows(num_columns, &values).unwrap();
            prop_assert_eq!(table.num_columns(), num_columns);
            prop_assert_eq!(table.num_rows(), rows);
            for (i, &v) in values.iter().enumerate() {
                prop_assert_eq!(table.column(i % num_columns).unwrap()[i / num_columns], v);
            }
        }
    }

    #[test]
    fn from_rows_splits_columns() {
        let table = Table::from_rows(2, &[0.1, 0.5, 0.2, 0.7, 0.3, 0.9]).unwrap();
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column(0).unwrap(), &[0.1, 0.2, 0.3]);
        assert_eq!(table.column(1).unwrap(), &[0.5, 0.7, 0.9]);
        assert!(table.column(2).is_none());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Table::from_rows(2, &[0.1, 0.5, 0.2]).is_err());
        assert!(Table::from_rows(0, &[]).is_err());
    }

    #[test]
    fn ragged_columns_are_rejected() {
        assert!(Table::new(vec![vec![1.0, 2.0], vec![1.0]]).is_err());
    }

    #[test]
    fn collection_from_keyword() {
        let keyword = DeckKeyword::new("AQUTAB")
            .with_record(DeckRecord::data(DeckItem::double(
                "DATA",
                vec![0.01, 0.112, 0.05, 0.229],
            )))
            .with_record(DeckRecord::data(DeckItem::double("DATA", vec![1.0, 2.0])));
        let tables = TableCollection::from_keyword(&keyword, 2).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables.table(0).unwrap().column(1).unwrap(), &[0.112, 0.229]);
        assert_eq!(tables.table(1).unwrap().num_rows(), 1);
        assert!(tables.table(2).is_none());
    }

    #[test]
    fn collection_rejects_non_data_record() {
        let keyword =
            DeckKeyword::new("AQUTAB").with_record(DeckRecord::new().with_item(DeckItem::int("X", vec![1])));
        let err = TableCollection::from_keyword(&keyword, 2).unwrap_err();
        assert!(matches!(err, DeckError::MalformedRecord { record: 0, .. }));
    }
}
