//! Composite deck fixtures.
//!
//! - [`AquctFixture`]: one `AQUCT` record with realistic metric values.
//! - [`aqutab_keyword`]: influence tables as a multi-record keyword.
//! - [`initialization_deck`]: a 3x3x3 deck with one inactive cell per layer.

use crate::{
    box_keyword, defaulted_data, double_data, edit_keyword, endbox, expand, int_data, tabdims,
    CURRENT_BOX,
};
use strata_core::{Deck, DeckItem, DeckKeyword, DeckRecord};

/// Values for one `AQUCT` record.
#[derive(Clone, Debug, PartialEq)]
pub struct AquctFixture {
    pub id: i32,
    pub datum_depth: f64,
    /// `None` leaves `P_INI` defaulted.
    pub p_ini: Option<f64>,
    pub perm: f64,
    pub poro: f64,
    pub c_t: f64,
    pub radius: f64,
    pub thickness: f64,
    pub angle: f64,
    pub pvt_table: i32,
    pub influence_table: i32,
}

impl Default for AquctFixture {
    fn default() -> Self {
        Self {
            id: 1,
            datum_depth: 2000.0,
            p_ini: Some(250.0),
            perm: 100.0,
            poro: 0.3,
            c_t: 5.0e-5,
            radius: 1000.0,
            thickness: 50.0,
            angle: 360.0,
            pvt_table: 1,
            influence_table: 1,
        }
    }
}

impl AquctFixture {
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// The record in deck item order.
    pub fn record(&self) -> DeckRecord {
        let p_ini = match self.p_ini {
            Some(p) => DeckItem::double("P_INI", vec![p]),
            None => DeckItem::double("P_INI", vec![0.0]).all_defaulted(),
        };
        DeckRecord::new()
            .with_item(DeckItem::int("AQUIFER_ID", vec![self.id]))
            .with_item(DeckItem::double("DAT_DEPTH", vec![self.datum_depth]))
            .with_item(p_ini)
            .with_item(DeckItem::double("PERM_AQ", vec![self.perm]))
            .with_item(DeckItem::double("PORO_AQ", vec![self.poro]))
            .with_item(DeckItem::double("C_T", vec![self.c_t]))
            .with_item(DeckItem::double("RAD", vec![self.radius]))
            .with_item(DeckItem::double("THICKNESS_AQ", vec![self.thickness]))
            .with_item(DeckItem::double("INFLUENCE_ANGLE", vec![self.angle]))
            .with_item(DeckItem::int("TABLE_NUM_WATER_PRESS", vec![self.pvt_table]))
            .with_item(DeckItem::int("TABLE_NUM_INFLUENCE_FN", vec![self.influence_table]))
    }
}

/// `AQUCT` keyword with one record per fixture.
pub fn aquct_keyword(aquifers: &[AquctFixture]) -> DeckKeyword {
    aquifers
        .iter()
        .fold(DeckKeyword::new("AQUCT"), |kw, a| kw.with_record(a.record()))
}

/// `AQUTAB` keyword; each table is row-major `(td, pi)` pairs.
pub fn aqutab_keyword(tables: &[Vec<f64>]) -> DeckKeyword {
    tables.iter().fold(DeckKeyword::new("AQUTAB"), |kw, rows| {
        kw.with_record(DeckRecord::data(DeckItem::double("DATA", rows.clone())))
    })
}

/// ACTNUM of [`initialization_deck`]: the first cell of each layer inactive.
pub fn initialization_actnum() -> Vec<i32> {
    expand(&[(1, 0), (8, 1), (1, 0), (8, 1), (1, 0), (8, 1)])
}

/// A 3x3x3 metric deck with three saturation regions, three layered
/// `SATNUM`/`IMBNUM` patterns, top-layer `TOPS` inside a `BOX`, defaulted
/// endpoint keywords, and uniform porosity.
pub fn initialization_deck() -> Deck {
    Deck::new()
        .with_keyword(DeckKeyword::new("OIL"))
        .with_keyword(DeckKeyword::new("GAS"))
        .with_keyword(DeckKeyword::new("WATER"))
        .with_keyword(tabdims(3, 1))
        .with_keyword(DeckKeyword::new("METRIC"))
        .with_keyword(DeckKeyword::new("GRID"))
        .with_keyword(int_data("ACTNUM", initialization_actnum()))
        .with_keyword(box_keyword([1, 3, 1, 3, 1, 1]))
        .with_keyword(double_data("TOPS", vec![100.0; 9]))
        .with_keyword(endbox())
        .with_keyword(edit_keyword("EQUALS", &[("PORO", 0.25, CURRENT_BOX)]))
        .with_keyword(DeckKeyword::new("PROPS"))
        .with_keyword(defaulted_data("SWU", 27))
        .with_keyword(defaulted_data("ISGU", 27))
        .with_keyword(defaulted_data("SGCR", 27))
        .with_keyword(defaulted_data("ISGCR", 27))
        .with_keyword(DeckKeyword::new("REGIONS"))
        .with_keyword(int_data("SATNUM", expand(&[(9, 1), (9, 2), (9, 3)])))
        .with_keyword(int_data("IMBNUM", expand(&[(9, 3), (9, 2), (9, 1)])))
        .with_keyword(DeckKeyword::new("SOLUTION"))
        .with_keyword(DeckKeyword::new("SCHEDULE"))
}
