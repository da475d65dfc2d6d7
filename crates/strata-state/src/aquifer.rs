//! Carter-Tracy aquifer records from the `AQUCT` keyword.

use strata_core::{Deck, DeckError, DeckRecord, TableSource, UnitSystem};
use tracing::{debug, trace, warn};

/// Number of items in a well-formed `AQUCT` record.
pub const AQUCT_ITEMS: usize = 11;

/// Dimensionless time of the built-in infinite-acting influence function.
pub const DEFAULT_INFLUENCE_TD: [f64; 47] = [
    0.01, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.5, 2.0, 2.5, 3.0,
    4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0,
    100.0, 150.0, 200.0, 250.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
];

/// Dimensionless pressure of the built-in infinite-acting influence function.
pub const DEFAULT_INFLUENCE_PI: [f64; 47] = [
    0.112, 0.229, 0.315, 0.376, 0.424, 0.469, 0.503, 0.564, 0.616, 0.659, 0.702, 0.735, 0.772,
    0.802, 0.927, 1.020, 1.101, 1.169, 1.275, 1.362, 1.436, 1.500, 1.556, 1.604, 1.651, 1.829,
    1.960, 2.067, 2.147, 2.282, 2.388, 2.476, 2.550, 2.615, 2.672, 2.723, 2.921, 3.064, 3.173,
    3.263, 3.406, 3.516, 3.608, 3.684, 3.750, 3.809, 3.860,
];

/// Table id meaning "no table": use the built-in influence function.
pub const NO_TABLE: i32 = 1;

/// Conversion constants `(c1, c2)` for aquifer influx in `units`.
pub fn influx_constants(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Field => (0.006328 * 1.5797e5, 1.1191 * 5.6164),
        UnitSystem::Metric => (0.008527 * 1.1727e9, 6.283),
    }
}

/// One Carter-Tracy aquifer. Scalar quantities are in SI.
#[derive(Clone, Debug, PartialEq)]
pub struct AquiferRecord {
    /// Aquifer id as written in the deck.
    pub aquifer_id: i32,
    /// Influx constant `c1` of the deck's unit system.
    pub c1: f64,
    /// Influx constant `c2` of the deck's unit system.
    pub c2: f64,
    /// Aquifer thickness.
    pub thickness: f64,
    /// Initial pressure.
    pub initial_pressure: f64,
    /// Whether the initial pressure was left defaulted in the deck.
    pub initial_pressure_defaulted: bool,
    /// Aquifer porosity.
    pub porosity: f64,
    /// Datum depth.
    pub datum_depth: f64,
    /// Total compressibility.
    pub total_compressibility: f64,
    /// Inner radius.
    pub radius: f64,
    /// Aquifer permeability.
    pub permeability: f64,
    /// Influence angle as a fraction of a full circle.
    pub influence_angle: f64,
    /// 1-based influence table id; [`NO_TABLE`] for the built-in function.
    pub influence_table_id: i32,
    /// 1-based water pressure table id.
    pub pressure_table_id: i32,
    /// Dimensionless time column of the influence function.
    pub td: Vec<f64>,
    /// Dimensionless pressure column of the influence function.
    pub pi: Vec<f64>,
}

/// All `AQUCT` aquifers of a deck, in record order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AquiferCt {
    aquifers: Vec<AquiferRecord>,
}

impl AquiferCt {
    /// Extract every `AQUCT` record.
    ///
    /// `tables` holds the deck's influence tables, addressed by
    /// `influence_table_id - 2`. `default_units` applies when the deck
    /// declares neither `FIELD` nor `METRIC`. A deck without `AQUCT` yields
    /// an empty result; any malformed record aborts the whole extraction.
    pub fn from_deck(
        deck: &Deck,
        tables: &dyn TableSource,
        default_units: UnitSystem,
    ) -> Result<Self, DeckError> {
        let Some(keyword) = deck.keyword("AQUCT") else {
            return Ok(Self::default());
        };

        let units = match UnitSystem::detect(deck) {
            Some(units) => units,
            None => {
                warn!(fallback = %default_units, "deck declares no unit system; using fallback for AQUCT");
                default_units
            }
        };
        let (c1, c2) = influx_constants(units);

        let mut aquifers = Vec::with_capacity(keyword.len());
        for (index, record) in keyword.iter().enumerate() {
            let aquifer = read_record(record, c1, c2, tables).map_err(|err| match err {
                DeckError::MissingTable { .. } | DeckError::MalformedRecord { .. } => err,
                other => DeckError::MalformedRecord {
                    keyword: "AQUCT".into(),
                    record: index,
                    reason: other.to_string(),
                },
            })?;
            trace!(
                aquifer = aquifer.aquifer_id,
                influence_table = aquifer.influence_table_id,
                pressure_table = aquifer.pressure_table_id,
                "read AQUCT record"
            );
            aquifers.push(aquifer);
        }
        debug!(aquifers = aquifers.len(), %units, "extracted Carter-Tracy aquifers");
        Ok(Self { aquifers })
    }

    /// All aquifers in record order.
    pub fn aquifers(&self) -> &[AquiferRecord] {
        &self.aquifers
    }

    /// Influence table id of the `index`-th aquifer.
    pub fn influence_table_id(&self, index: usize) -> Option<i32> {
        self.aquifers.get(index).map(|a| a.influence_table_id)
    }

    /// Water pressure table id of the `index`-th aquifer.
    pub fn pressure_table_id(&self, index: usize) -> Option<i32> {
        self.aquifers.get(index).map(|a| a.pressure_table_id)
    }

    /// Number of aquifers.
    pub fn len(&self) -> usize {
        self.aquifers.len()
    }

    /// Returns `true` if the deck defined no aquifers.
    pub fn is_empty(&self) -> bool {
        self.aquifers.is_empty()
    }

    /// Iterate over aquifers in record order.
    pub fn iter(&self) -> std::slice::Iter<'_, AquiferRecord> {
        self.aquifers.iter()
    }
}

impl<'a> IntoIterator for &'a AquiferCt {
    type Item = &'a AquiferRecord;
    type IntoIter = std::slice::Iter<'a, AquiferRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.aquifers.iter()
    }
}

fn si(record: &DeckRecord, item: &str) -> Result<f64, DeckError> {
    record.item(item)?.get_si_double(0)
}

fn int(record: &DeckRecord, item: &str) -> Result<i32, DeckError> {
    record.item(item)?.get_int(0)
}

fn read_record(
    record: &DeckRecord,
    c1: f64,
    c2: f64,
    tables: &dyn TableSource,
) -> Result<AquiferRecord, DeckError> {
    if record.len() != AQUCT_ITEMS {
        return Err(DeckError::SizeMismatch {
            name: "AQUCT record".into(),
            expected: AQUCT_ITEMS,
            actual: record.len(),
        });
    }

    let influence_table_id = int(record, "TABLE_NUM_INFLUENCE_FN")?;
    let (td, pi) = influence_function(influence_table_id, tables)?;

    Ok(AquiferRecord {
        aquifer_id: int(record, "AQUIFER_ID")?,
        c1,
        c2,
        thickness: si(record, "THICKNESS_AQ")?,
        initial_pressure: si(record, "P_INI")?,
        initial_pressure_defaulted: record.item("P_INI")?.default_applied(0)?,
        porosity: si(record, "PORO_AQ")?,
        datum_depth: si(record, "DAT_DEPTH")?,
        total_compressibility: si(record, "C_T")?,
        radius: si(record, "RAD")?,
        permeability: si(record, "PERM_AQ")?,
        influence_angle: si(record, "INFLUENCE_ANGLE")? / 360.0,
        influence_table_id,
        pressure_table_id: int(record, "TABLE_NUM_WATER_PRESS")?,
        td,
        pi,
    })
}

/// `(td, pi)` columns for an influence table id.
fn influence_function(
    table_id: i32,
    tables: &dyn TableSource,
) -> Result<(Vec<f64>, Vec<f64>), DeckError> {
    if table_id <= NO_TABLE {
        return Ok((DEFAULT_INFLUENCE_TD.to_vec(), DEFAULT_INFLUENCE_PI.to_vec()));
    }
    let missing = || DeckError::MissingTable {
        table_id,
        available: tables.len(),
    };
    let position = usize::try_from(table_id - 2).map_err(|_| missing())?;
    let table = tables.table(position).ok_or_else(missing)?;
    match (table.column(0), table.column(1)) {
        (Some(td), Some(pi)) => Ok((td.to_vec(), pi.to_vec())),
        _ => Err(DeckError::SizeMismatch {
            name: format!("influence table {table_id}"),
            expected: 2,
            actual: table.num_columns(),
        }),
    }
}
