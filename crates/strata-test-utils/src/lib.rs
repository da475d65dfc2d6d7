//! Test utilities for Strata development.
//!
//! Builders for the deck shapes a tokenizer would hand over (data keywords,
//! `BOX`, edit keywords) and small grids. Composite decks and aquifer
//! records live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{initialization_deck, AquctFixture};

use strata_core::{DeckItem, DeckKeyword, DeckRecord};
use strata_grid::{ActiveMap, GridDims};

/// Box bounds with every item defaulted.
pub const CURRENT_BOX: [Option<usize>; 6] = [None; 6];

/// Run-length expansion, the way a deck writes `9*1 9*2`.
pub fn expand<T: Clone>(runs: &[(usize, T)]) -> Vec<T> {
    runs.iter()
        .flat_map(|(n, v)| std::iter::repeat(v.clone()).take(*n))
        .collect()
}

/// Data keyword holding integer values.
pub fn int_data(name: &str, values: Vec<i32>) -> DeckKeyword {
    DeckKeyword::data(name, DeckItem::int("data", values))
}

/// Data keyword holding floating values with identity units.
pub fn double_data(name: &str, values: Vec<f64>) -> DeckKeyword {
    DeckKeyword::data(name, DeckItem::double("data", values))
}

/// Data keyword of `len` floating values, all defaulted (`name * /`).
pub fn defaulted_data(name: &str, len: usize) -> DeckKeyword {
    DeckKeyword::data(name, DeckItem::double("data", vec![0.0; len]).all_defaulted())
}

fn bound_item(name: &str, bound: Option<usize>) -> DeckItem {
    match bound {
        Some(b) => DeckItem::int(name, vec![b as i32]),
        None => DeckItem::int(name, vec![0]).all_defaulted(),
    }
}

/// Pushes the six 1-based box items `I1..K2` onto a record.
pub fn with_bounds(mut record: DeckRecord, bounds: [Option<usize>; 6]) -> DeckRecord {
    for (name, bound) in ["I1", "I2", "J1", "J2", "K1", "K2"].into_iter().zip(bounds) {
        record.push(bound_item(name, bound));
    }
    record
}

/// `BOX` keyword with 1-based bounds.
pub fn box_keyword(bounds: [usize; 6]) -> DeckKeyword {
    DeckKeyword::new("BOX").with_record(with_bounds(DeckRecord::new(), bounds.map(Some)))
}

/// `ENDBOX` keyword.
pub fn endbox() -> DeckKeyword {
    DeckKeyword::new("ENDBOX")
}

/// Name of the scalar item of an edit keyword.
pub fn operand_item(keyword: &str) -> &'static str {
    match keyword {
        "ADD" | "ADDREG" => "SHIFT",
        "MULTIPLY" | "MULTIREG" => "FACTOR",
        _ => "VALUE",
    }
}

/// `EQUALS`, `ADD` or `MULTIPLY` with records `(FIELD, value, bounds)`.
pub fn edit_keyword(name: &str, records: &[(&str, f64, [Option<usize>; 6])]) -> DeckKeyword {
    records
        .iter()
        .fold(DeckKeyword::new(name), |kw, &(field, value, bounds)| {
            let record = DeckRecord::new()
                .with_item(DeckItem::string("FIELD", vec![field]))
                .with_item(DeckItem::double(operand_item(name), vec![value]));
            kw.with_record(with_bounds(record, bounds))
        })
}

/// `COPY` with records `(SRC, TARGET, bounds)`.
pub fn copy_keyword(records: &[(&str, &str, [Option<usize>; 6])]) -> DeckKeyword {
    records
        .iter()
        .fold(DeckKeyword::new("COPY"), |kw, &(src, target, bounds)| {
            let record = DeckRecord::new()
                .with_item(DeckItem::string("SRC", vec![src]))
                .with_item(DeckItem::string("TARGET", vec![target]));
            kw.with_record(with_bounds(record, bounds))
        })
}

/// `EQUALREG`, `ADDREG` or `MULTIREG` with records
/// `(ARRAY, value, region number, region name)`.
pub fn region_keyword(name: &str, records: &[(&str, f64, i32, Option<&str>)]) -> DeckKeyword {
    records
        .iter()
        .fold(DeckKeyword::new(name), |kw, &(array, value, region, region_name)| {
            let region_name = match region_name {
                Some(r) => DeckItem::string("REGION_NAME", vec![r]),
                None => DeckItem::string("REGION_NAME", vec!["M"]).all_defaulted(),
            };
            kw.with_record(
                DeckRecord::new()
                    .with_item(DeckItem::string("ARRAY", vec![array]))
                    .with_item(DeckItem::double(operand_item(name), vec![value]))
                    .with_item(DeckItem::int("REGION_NUMBER", vec![region]))
                    .with_item(region_name),
            )
        })
}

/// `TABDIMS` with `NTSFUN` and `NTPVT`.
pub fn tabdims(ntsfun: i32, ntpvt: i32) -> DeckKeyword {
    DeckKeyword::new("TABDIMS").with_record(
        DeckRecord::new()
            .with_item(DeckItem::int("NTSFUN", vec![ntsfun]))
            .with_item(DeckItem::int("NTPVT", vec![ntpvt])),
    )
}

/// `EQLDIMS` with `NTEQUL`.
pub fn eqldims(ntequl: i32) -> DeckKeyword {
    DeckKeyword::new("EQLDIMS")
        .with_record(DeckRecord::new().with_item(DeckItem::int("NTEQUL", vec![ntequl])))
}

/// Grid dimensions; panics on a zero extent.
pub fn dims(nx: usize, ny: usize, nz: usize) -> GridDims {
    GridDims::new(nx, ny, nz).expect("fixture grid must be non-empty")
}

/// All-active grid.
pub fn grid(nx: usize, ny: usize, nz: usize) -> ActiveMap {
    ActiveMap::all_active(dims(nx, ny, nz))
}

/// Grid with an ACTNUM array.
pub fn grid_with_actnum(nx: usize, ny: usize, nz: usize, actnum: &[i32]) -> ActiveMap {
    ActiveMap::from_actnum(dims(nx, ny, nz), actnum).expect("fixture ACTNUM must match grid")
}
