//! A single named, typed, per-cell array over a structured grid.

use crate::value::GridValue;
use strata_core::{DeckError, DeckKeyword, DeckRecord, KeywordDescriptor};
use strata_grid::{ActiveIndexMap, CellBox, GridDims};
use tracing::trace;

/// Typed per-cell storage for one keyword.
///
/// The array always covers the full grid (`nx*ny*nz` cells, inactive ones
/// included) and is never resized. Each cell carries a "left at default"
/// flag; the property as a whole records whether any deck keyword has
/// written to it.
///
/// Box-scoped operators visit cells in [`CellBox`] canonical order. Passing
/// a box built for a different grid is a programming error and panics.
#[derive(Clone, Debug, PartialEq)]
pub struct GridProperty<T: GridValue> {
    dims: GridDims,
    descriptor: KeywordDescriptor<T>,
    data: Vec<T>,
    defaulted: Vec<bool>,
    deck_assigned: bool,
}

impl<T: GridValue> GridProperty<T> {
    /// Allocate a property with every cell at the descriptor default.
    pub fn new(dims: GridDims, descriptor: KeywordDescriptor<T>) -> Self {
        let n = dims.cartesian_size();
        Self {
            dims,
            data: vec![descriptor.default_value(); n],
            defaulted: vec![true; n],
            descriptor,
            deck_assigned: false,
        }
    }

    /// Keyword name.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// The descriptor this property was created from.
    pub fn descriptor(&self) -> &KeywordDescriptor<T> {
        &self.descriptor
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of cells, `nx*ny*nz`.
    pub fn cartesian_size(&self) -> usize {
        self.data.len()
    }

    /// All cell values in global order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Value at global index `g`.
    ///
    /// # Panics
    ///
    /// Panics if `g` is out of range.
    pub fn get(&self, g: usize) -> T {
        self.data[g]
    }

    /// Value at `(i, j, k)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn get_ijk(&self, i: usize, j: usize, k: usize) -> T {
        self.data[self.dims.global_index(i, j, k)]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, g: usize, value: T) {
        self.data[g] = value;
        self.defaulted[g] = false;
    }

    /// Whether cell `g` still holds a default rather than an explicit value.
    pub fn is_defaulted(&self, g: usize) -> bool {
        self.defaulted[g]
    }

    /// Whether any deck keyword has written to this property.
    pub fn is_deck_assigned(&self) -> bool {
        self.deck_assigned
    }

    /// Record that a deck keyword wrote to this property.
    pub fn mark_deck_assigned(&mut self) {
        self.deck_assigned = true;
    }

    fn check_region(&self, region: &CellBox) {
        assert_eq!(
            region.dims(),
            self.dims,
            "box for grid {} applied to '{}' on grid {}",
            region.dims(),
            self.name(),
            self.dims,
        );
    }

    fn check_len(&self, actual: usize) -> Result<(), DeckError> {
        if actual == self.data.len() {
            Ok(())
        } else {
            Err(DeckError::SizeMismatch {
                name: self.name().into(),
                expected: self.data.len(),
                actual,
            })
        }
    }

    fn overflow(&self, cell: usize, operand: T) -> DeckError {
        DeckError::Overflow {
            name: self.name().into(),
            cell,
            value: self.data[cell].to_string(),
            operand: operand.to_string(),
        }
    }

    /// Combine each listed cell with `operand`, all or nothing.
    fn checked_update(
        &mut self,
        cells: impl Iterator<Item = usize>,
        operand: T,
        op: fn(T, T) -> Option<T>,
    ) -> Result<(), DeckError> {
        let updated = cells
            .map(|g| op(self.data[g], operand).map(|v| (g, v)).ok_or_else(|| self.overflow(g, operand)))
            .collect::<Result<Vec<_>, _>>()?;
        for (g, v) in updated {
            self.data[g] = v;
        }
        Ok(())
    }

    /// Fill from a data keyword (a keyword with one literal data record).
    pub fn load_from_keyword(&mut self, keyword: &DeckKeyword) -> Result<(), DeckError> {
        if !keyword.is_data_keyword() {
            return Err(DeckError::NotData {
                name: keyword.name().into(),
            });
        }
        self.load_from_record(&keyword.records()[0])
    }

    /// Fill the whole grid from a data record, values in global order.
    ///
    /// See [`load_into`](Self::load_into).
    pub fn load_from_record(&mut self, record: &DeckRecord) -> Result<(), DeckError> {
        self.load_into(record, &CellBox::whole(self.dims))
    }

    /// Fill the cells of `region` from a data record, in box order.
    ///
    /// Fails if the record is not a data record or does not hold exactly
    /// one value per box cell; on failure the property is unchanged.
    /// Positions the deck left defaulted keep their current value and are
    /// flagged defaulted. For additive descriptors, a load after the first
    /// deck assignment adds to the existing values, failing with
    /// [`DeckError::Overflow`] if a sum does not fit.
    pub fn load_into(&mut self, record: &DeckRecord, region: &CellBox) -> Result<(), DeckError> {
        self.check_region(region);
        let item = record.data_item().ok_or_else(|| DeckError::NotData {
            name: self.name().into(),
        })?;
        if item.len() != region.size() {
            return Err(DeckError::SizeMismatch {
                name: self.name().into(),
                expected: region.size(),
                actual: item.len(),
            });
        }

        let mut values = Vec::with_capacity(item.len());
        for index in 0..item.len() {
            let value = if item.default_applied(index)? {
                None
            } else {
                Some(T::from_item(item, index)?)
            };
            values.push(value);
        }

        let accumulate = self.descriptor.is_additive() && self.deck_assigned;
        let mut updates = Vec::with_capacity(values.len());
        for (g, value) in region.global_indices().zip(values) {
            let value = match value {
                Some(v) if accumulate => {
                    Some(self.data[g].checked_add(v).ok_or_else(|| self.overflow(g, v))?)
                }
                other => other,
            };
            updates.push((g, value));
        }

        for (g, value) in updates {
            match value {
                Some(v) => {
                    self.data[g] = v;
                    self.defaulted[g] = false;
                }
                None if accumulate => {}
                None => self.defaulted[g] = true,
            }
        }
        self.deck_assigned = true;
        trace!(keyword = self.name(), cells = region.size(), accumulate, "loaded data record");
        Ok(())
    }

    /// Copy `source` values (and defaulted flags) for every cell in `region`.
    pub fn copy_region(&mut self, source: &GridProperty<T>, region: &CellBox) -> Result<(), DeckError> {
        self.check_len(source.cartesian_size())?;
        self.check_region(region);
        for g in region.global_indices() {
            self.data[g] = source.data[g];
            self.defaulted[g] = source.defaulted[g];
        }
        Ok(())
    }

    /// Overwrite every cell in `region` with `value`.
    pub fn set_scalar(&mut self, value: T, region: &CellBox) {
        self.check_region(region);
        for g in region.global_indices() {
            self.data[g] = value;
            self.defaulted[g] = false;
        }
    }

    /// Add `shift` to every cell in `region`.
    ///
    /// On overflow nothing is written.
    pub fn add_scalar(&mut self, shift: T, region: &CellBox) -> Result<(), DeckError> {
        self.check_region(region);
        self.checked_update(region.global_indices(), shift, T::checked_add)
    }

    /// Multiply every cell in `region` by `factor`.
    ///
    /// On overflow nothing is written.
    pub fn scale(&mut self, factor: T, region: &CellBox) -> Result<(), DeckError> {
        self.check_region(region);
        self.checked_update(region.global_indices(), factor, T::checked_mul)
    }

    /// Elementwise product with another property on an equally sized grid.
    pub fn multiply_elementwise(&mut self, other: &GridProperty<T>) -> Result<(), DeckError> {
        self.check_len(other.cartesian_size())?;
        let product = self
            .data
            .iter()
            .zip(&other.data)
            .enumerate()
            .map(|(g, (&a, &b))| a.checked_mul(b).ok_or_else(|| self.overflow(g, b)))
            .collect::<Result<Vec<_>, _>>()?;
        self.data = product;
        Ok(())
    }

    /// Fail if any cell lies outside `[min, max]`. NaN is never inside.
    pub fn check_limits(&self, min: T, max: T) -> Result<(), DeckError> {
        match self.data.iter().position(|v| !(min..=max).contains(v)) {
            Some(cell) => Err(DeckError::OutOfLimits {
                name: self.name().into(),
                cell,
                value: self.data[cell].to_string(),
                min: min.to_string(),
                max: max.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns `true` if any cell still holds the "unset" sentinel.
    pub fn contains_sentinel(&self) -> bool {
        self.data.iter().any(T::is_sentinel)
    }

    /// One flag per cell, `true` where the cell equals `value`.
    pub fn init_mask(&self, value: T) -> Vec<bool> {
        self.data.iter().map(|&v| v == value).collect()
    }

    /// Overwrite the cells where `mask` is `true`.
    pub fn masked_set(&mut self, value: T, mask: &[bool]) -> Result<(), DeckError> {
        self.check_len(mask.len())?;
        for g in Self::masked_cells(mask) {
            self.data[g] = value;
            self.defaulted[g] = false;
        }
        Ok(())
    }

    fn masked_cells(mask: &[bool]) -> impl Iterator<Item = usize> + '_ {
        mask.iter().enumerate().filter(|(_, &m)| m).map(|(g, _)| g)
    }

    /// Add `shift` to the cells where `mask` is `true`.
    pub fn masked_add(&mut self, shift: T, mask: &[bool]) -> Result<(), DeckError> {
        self.check_len(mask.len())?;
        self.checked_update(Self::masked_cells(mask), shift, T::checked_add)
    }

    /// Multiply the cells where `mask` is `true` by `factor`.
    pub fn masked_scale(&mut self, factor: T, mask: &[bool]) -> Result<(), DeckError> {
        self.check_len(mask.len())?;
        self.checked_update(Self::masked_cells(mask), factor, T::checked_mul)
    }

    fn check_map<M: ActiveIndexMap + ?Sized>(&self, map: &M) -> Result<(), DeckError> {
        self.check_len(map.cartesian_size())
    }

    /// Active-cell-only copy: entry `a` is the value at `map.global_index(a)`.
    pub fn compressed_copy<M: ActiveIndexMap + ?Sized>(&self, map: &M) -> Result<Vec<T>, DeckError> {
        self.check_map(map)?;
        Ok((0..map.active_count())
            .map(|a| self.data[map.global_index(a)])
            .collect())
    }

    /// Indices of the cells equal to `value`, ascending.
    ///
    /// With `active_only`, only active cells are considered and their
    /// *active* indices are returned; otherwise this is
    /// [`index_equal`](Self::index_equal).
    pub fn cells_equal<M: ActiveIndexMap + ?Sized>(
        &self,
        value: T,
        map: &M,
        active_only: bool,
    ) -> Result<Vec<usize>, DeckError> {
        self.check_map(map)?;
        if !active_only {
            return Ok(self.index_equal(value));
        }
        Ok((0..map.active_count())
            .filter(|&a| self.data[map.global_index(a)] == value)
            .collect())
    }

    /// Global indices of the cells equal to `value`, ascending, unfiltered.
    pub fn index_equal(&self, value: T) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == value)
            .map(|(g, _)| g)
            .collect()
    }
}
