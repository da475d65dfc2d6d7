//! Element types a grid property may hold.

use std::fmt;
use strata_core::{DeckError, DeckItem};

/// Element type of a [`GridProperty`](crate::GridProperty).
///
/// Implemented for `i32` (region numbers, flags) and `f64` (physical
/// quantities). Only `f64` has an "unset" sentinel: NaN.
///
/// Arithmetic goes through `checked_add` / `checked_mul`; `None` means the
/// result does not fit. Floating arithmetic never fails.
pub trait GridValue: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// Read the value at `index` of a deck item, in SI for floating data.
    fn from_item(item: &DeckItem, index: usize) -> Result<Self, DeckError>;

    /// `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Returns `true` if this value is the "unset" sentinel.
    fn is_sentinel(&self) -> bool;
}

impl GridValue for i32 {
    fn from_item(item: &DeckItem, index: usize) -> Result<Self, DeckError> {
        match item.get_int(index) {
            Ok(v) => Ok(v),
            Err(DeckError::WrongValueType { .. }) => {
                let v = item.get_double(index)?;
                if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
                    Ok(v as i32)
                } else {
                    Err(DeckError::WrongValueType {
                        item: item.name().into(),
                        expected: "integer",
                    })
                }
            }
            Err(err) => Err(err),
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }

    fn is_sentinel(&self) -> bool {
        false
    }
}

impl GridValue for f64 {
    fn from_item(item: &DeckItem, index: usize) -> Result<Self, DeckError> {
        item.get_si_double(index)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn is_sentinel(&self) -> bool {
        self.is_nan()
    }
}
