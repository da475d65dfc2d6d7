//! Deck keyword processing into a [`GridPropertySet`].
//!
//! [`PropertyProcessor`] walks a deck in order and applies:
//!
//! - `BOX` / `ENDBOX`: set and reset the current input box.
//! - data keywords of supported properties, loaded into the input box. A
//!   supported keyword that is not a single literal data record is an error.
//! - `EQUALS`, `ADD`, `MULTIPLY`: box-scoped scalar edits.
//! - `COPY`: box-scoped copy between properties of the same type.
//! - `EQUALREG`, `ADDREG`, `MULTIREG`: scalar edits over a region mask.
//!
//! Every other keyword is skipped. [`validate_properties`] then checks
//! region numbers against the table dimensions and required properties
//! against the active cells.

use crate::config::ResolveConfig;
use strata_core::{Deck, DeckError, DeckItem, DeckKeyword, DeckRecord};
use strata_grid::{CellBox, GridDims, StructuredGrid};
use strata_props::{GridProperties, GridPropertySet, GridValue, PropertyKind};
use tracing::{debug, trace};

const BOX_ITEMS: [&str; 6] = ["I1", "I2", "J1", "J2", "K1", "K2"];

/// A scalar edit shared by the box and region keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// `EQUALS` / `EQUALREG`: overwrite.
    Assign,
    /// `ADD` / `ADDREG`: shift.
    Add,
    /// `MULTIPLY` / `MULTIREG`: scale.
    Multiply,
}

impl EditOp {
    /// The box-scoped keyword for this edit.
    pub fn box_keyword(&self) -> &'static str {
        match self {
            Self::Assign => "EQUALS",
            Self::Add => "ADD",
            Self::Multiply => "MULTIPLY",
        }
    }

    /// The region-scoped keyword for this edit.
    pub fn region_keyword(&self) -> &'static str {
        match self {
            Self::Assign => "EQUALREG",
            Self::Add => "ADDREG",
            Self::Multiply => "MULTIREG",
        }
    }

    /// Name of the record item holding the scalar operand.
    pub fn operand_item(&self) -> &'static str {
        match self {
            Self::Assign => "VALUE",
            Self::Add => "SHIFT",
            Self::Multiply => "FACTOR",
        }
    }

    fn from_box_keyword(name: &str) -> Option<Self> {
        [Self::Assign, Self::Add, Self::Multiply]
            .into_iter()
            .find(|op| op.box_keyword() == name)
    }

    fn from_region_keyword(name: &str) -> Option<Self> {
        [Self::Assign, Self::Add, Self::Multiply]
            .into_iter()
            .find(|op| op.region_keyword() == name)
    }
}

/// Region-number keyword selected by a region record's `REGION_NAME`.
fn region_property(code: &str) -> Option<&'static str> {
    match code {
        "M" => Some("MULTNUM"),
        "F" => Some("FLUXNUM"),
        "O" => Some("OPERNUM"),
        _ => None,
    }
}

fn malformed(keyword: &DeckKeyword, record: usize, reason: impl Into<String>) -> DeckError {
    DeckError::MalformedRecord {
        keyword: keyword.name().into(),
        record,
        reason: reason.into(),
    }
}

/// 1-based box items of a record; absent or defaulted items are `None`.
fn one_based_bounds(record: &DeckRecord) -> Result<[Option<usize>; 6], DeckError> {
    let mut bounds = [None; 6];
    for (slot, name) in bounds.iter_mut().zip(BOX_ITEMS) {
        let Ok(item) = record.item(name) else {
            continue;
        };
        if item.default_applied(0)? {
            continue;
        }
        let value = item.get_int(0)?;
        let bound = usize::try_from(value).map_err(|_| DeckError::InvalidRegion {
            reason: format!("{name} = {value} is negative"),
        })?;
        *slot = Some(bound);
    }
    Ok(bounds)
}

fn string_item<'r>(record: &'r DeckRecord, name: &str) -> Result<&'r str, DeckError> {
    record.item(name)?.get_string(0)
}

fn edit_box<T: GridValue>(
    registry: &mut GridProperties<T>,
    op: EditOp,
    field: &str,
    operand: &DeckItem,
    region: &CellBox,
) -> Result<(), DeckError> {
    let value = T::from_item(operand, 0)?;
    let property = registry.get_or_create(field)?;
    match op {
        EditOp::Assign => property.set_scalar(value, region),
        EditOp::Add => property.add_scalar(value, region)?,
        EditOp::Multiply => property.scale(value, region)?,
    }
    property.mark_deck_assigned();
    Ok(())
}

fn edit_masked<T: GridValue>(
    registry: &mut GridProperties<T>,
    op: EditOp,
    field: &str,
    operand: &DeckItem,
    mask: &[bool],
) -> Result<(), DeckError> {
    let value = T::from_item(operand, 0)?;
    let property = registry.get_or_create(field)?;
    match op {
        EditOp::Assign => property.masked_set(value, mask)?,
        EditOp::Add => property.masked_add(value, mask)?,
        EditOp::Multiply => property.masked_scale(value, mask)?,
    }
    property.mark_deck_assigned();
    Ok(())
}

fn copy_box<T: GridValue>(
    registry: &mut GridProperties<T>,
    source: &str,
    target: &str,
    region: &CellBox,
) -> Result<(), DeckError> {
    let source = registry.get(source)?.clone();
    let target = registry.get_or_create(target)?;
    target.copy_region(&source, region)?;
    target.mark_deck_assigned();
    Ok(())
}

/// Applies deck keywords to a property set, tracking the input box.
#[derive(Clone, Debug)]
pub struct PropertyProcessor {
    global: CellBox,
    input_box: CellBox,
}

impl PropertyProcessor {
    /// A processor whose input box starts as the whole grid.
    pub fn new(dims: GridDims) -> Self {
        let global = CellBox::whole(dims);
        Self {
            global,
            input_box: global,
        }
    }

    /// The current input box.
    pub fn input_box(&self) -> &CellBox {
        &self.input_box
    }

    /// Apply every keyword of `deck` in order.
    ///
    /// Stops at the first failing keyword; keywords before it stay applied.
    pub fn process(&mut self, deck: &Deck, properties: &mut GridPropertySet) -> Result<(), DeckError> {
        for keyword in deck {
            self.apply(keyword, properties)?;
        }
        Ok(())
    }

    /// Apply one keyword. Keywords with no effect on properties are skipped.
    pub fn apply(&mut self, keyword: &DeckKeyword, properties: &mut GridPropertySet) -> Result<(), DeckError> {
        let name = keyword.name();
        if name == "BOX" {
            return self.set_box(keyword);
        }
        if name == "ENDBOX" {
            trace!("input box reset to global");
            self.input_box = self.global;
            return Ok(());
        }
        if name == "COPY" {
            return self.apply_copy(keyword, properties);
        }
        if let Some(op) = EditOp::from_box_keyword(name) {
            return self.apply_box_edit(op, keyword, properties);
        }
        if let Some(op) = EditOp::from_region_keyword(name) {
            return self.apply_region_edit(op, keyword, properties);
        }
        match properties.kind_of(name) {
            Some(kind) => self.load(kind, keyword, properties),
            None => {
                trace!(keyword = name, "skipping keyword");
                Ok(())
            }
        }
    }

    fn set_box(&mut self, keyword: &DeckKeyword) -> Result<(), DeckError> {
        let record = keyword
            .record(0)
            .ok_or_else(|| malformed(keyword, 0, "BOX needs one record"))?;
        self.input_box = self.global.from_one_based(one_based_bounds(record)?)?;
        trace!(bounds = ?self.input_box.bounds(), "input box set");
        Ok(())
    }

    /// Box for an edit record: explicit items win, defaulted items take the
    /// input box bound. The result must lie inside the grid.
    fn record_box(&self, record: &DeckRecord) -> Result<CellBox, DeckError> {
        let current = self.input_box.bounds();
        let mut bounds = one_based_bounds(record)?;
        for (bound, fallback) in bounds.iter_mut().zip(current) {
            bound.get_or_insert(fallback + 1);
        }
        Ok(self.global.from_one_based(bounds)?)
    }

    fn load(
        &self,
        kind: PropertyKind,
        keyword: &DeckKeyword,
        properties: &mut GridPropertySet,
    ) -> Result<(), DeckError> {
        let name = keyword.name();
        let record = match keyword.records() {
            [record] if keyword.is_data_keyword() => record,
            _ => return Err(DeckError::NotData { name: name.into() }),
        };
        match kind {
            PropertyKind::Int => properties
                .ints_mut()
                .get_or_create(name)?
                .load_into(record, &self.input_box)?,
            PropertyKind::Double => properties
                .doubles_mut()
                .get_or_create(name)?
                .load_into(record, &self.input_box)?,
        }
        debug!(keyword = name, cells = self.input_box.size(), "loaded property");
        Ok(())
    }

    fn apply_box_edit(
        &self,
        op: EditOp,
        keyword: &DeckKeyword,
        properties: &mut GridPropertySet,
    ) -> Result<(), DeckError> {
        for record in keyword {
            let field = string_item(record, "FIELD")?;
            let operand = record.item(op.operand_item())?;
            let region = self.record_box(record)?;
            match properties.kind_of(field) {
                Some(PropertyKind::Int) => edit_box(properties.ints_mut(), op, field, operand, &region)?,
                Some(PropertyKind::Double) => {
                    edit_box(properties.doubles_mut(), op, field, operand, &region)?
                }
                None => return Err(DeckError::UnsupportedKeyword { name: field.into() }),
            }
            trace!(keyword = keyword.name(), field, cells = region.size(), "box edit");
        }
        debug!(keyword = keyword.name(), records = keyword.len(), "applied edit keyword");
        Ok(())
    }

    fn apply_copy(&self, keyword: &DeckKeyword, properties: &mut GridPropertySet) -> Result<(), DeckError> {
        for (index, record) in keyword.iter().enumerate() {
            let source = string_item(record, "SRC")?;
            let target = string_item(record, "TARGET")?;
            let region = self.record_box(record)?;
            let source_kind = properties
                .kind_of(source)
                .ok_or_else(|| DeckError::UnsupportedKeyword { name: source.into() })?;
            let target_kind = properties
                .kind_of(target)
                .ok_or_else(|| DeckError::UnsupportedKeyword { name: target.into() })?;
            if source_kind != target_kind {
                return Err(malformed(
                    keyword,
                    index,
                    format!("cannot copy {source_kind} '{source}' into {target_kind} '{target}'"),
                ));
            }
            match source_kind {
                PropertyKind::Int => copy_box(properties.ints_mut(), source, target, &region)?,
                PropertyKind::Double => copy_box(properties.doubles_mut(), source, target, &region)?,
            }
            trace!(source, target, cells = region.size(), "copy");
        }
        debug!(records = keyword.len(), "applied COPY");
        Ok(())
    }

    fn apply_region_edit(
        &self,
        op: EditOp,
        keyword: &DeckKeyword,
        properties: &mut GridPropertySet,
    ) -> Result<(), DeckError> {
        for (index, record) in keyword.iter().enumerate() {
            let array = string_item(record, "ARRAY")?;
            let operand = record.item(op.operand_item())?;
            let region_number = record.item("REGION_NUMBER")?.get_int(0)?;
            let code = match record.item("REGION_NAME") {
                Ok(item) if !item.default_applied(0)? => item.get_string(0)?,
                _ => "M",
            };
            let region_keyword = region_property(code)
                .ok_or_else(|| malformed(keyword, index, format!("unknown region name '{code}'")))?;
            let mask = properties
                .ints_mut()
                .get_or_create(region_keyword)?
                .init_mask(region_number);
            match properties.kind_of(array) {
                Some(PropertyKind::Int) => edit_masked(properties.ints_mut(), op, array, operand, &mask)?,
                Some(PropertyKind::Double) => {
                    edit_masked(properties.doubles_mut(), op, array, operand, &mask)?
                }
                None => return Err(DeckError::UnsupportedKeyword { name: array.into() }),
            }
            trace!(
                keyword = keyword.name(),
                array,
                region = region_keyword,
                region_number,
                "region edit"
            );
        }
        debug!(keyword = keyword.name(), records = keyword.len(), "applied region keyword");
        Ok(())
    }
}

/// Upper limit for a table-count item, if the sizing keyword is present.
///
/// A defaulted item counts as 1.
fn table_count(deck: &Deck, keyword: &str, item: &str) -> Result<Option<i32>, DeckError> {
    let Some(record) = deck.keyword(keyword).and_then(|kw| kw.record(0)) else {
        return Ok(None);
    };
    let count = match record.item(item) {
        Ok(item) if !item.default_applied(0)? => item.get_int(0)?,
        _ => 1,
    };
    Ok(Some(count))
}

/// Post-processing checks on a resolved property set.
///
/// - With `check_region_limits`, `SATNUM`/`IMBNUM` must lie in
///   `[1, NTSFUN]`, `PVTNUM` in `[1, NTPVT]` (both from `TABDIMS`) and
///   `EQLNUM` in `[1, NTEQUL]` (from `EQLDIMS`). A limit is only enforced
///   when its sizing keyword is in the deck.
/// - Every required floating property must be set in every active cell.
pub fn validate_properties(
    deck: &Deck,
    properties: &GridPropertySet,
    grid: &dyn StructuredGrid,
    config: &ResolveConfig,
) -> Result<(), DeckError> {
    if config.check_region_limits {
        let limits = [
            ("SATNUM", table_count(deck, "TABDIMS", "NTSFUN")?),
            ("IMBNUM", table_count(deck, "TABDIMS", "NTSFUN")?),
            ("PVTNUM", table_count(deck, "TABDIMS", "NTPVT")?),
            ("EQLNUM", table_count(deck, "EQLDIMS", "NTEQUL")?),
        ];
        for (name, max) in limits {
            let Some(max) = max else { continue };
            if properties.ints().has(name) {
                properties.int_property(name)?.check_limits(1, max)?;
                trace!(keyword = name, max, "region numbers within limits");
            }
        }
    }

    for name in &config.required_properties {
        let unset = match properties.doubles().get(name) {
            Ok(property) if !property.contains_sentinel() => 0,
            Ok(property) => property
                .compressed_copy(grid)?
                .iter()
                .filter(|v| v.is_sentinel())
                .count(),
            Err(DeckError::NotPresent { .. }) => grid.active_count(),
            Err(err) => return Err(err),
        };
        if unset > 0 {
            return Err(DeckError::UnsetCells {
                name: name.clone(),
                count: unset,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_core::ErrorKind;
    use strata_grid::ActiveMap;
    use strata_test_utils::{
        box_keyword, copy_keyword, dims, double_data, edit_keyword, endbox, eqldims, int_data,
        region_keyword, tabdims, CURRENT_BOX,
    };

    fn run(deck: &Deck, nx: usize, ny: usize, nz: usize) -> Result<GridPropertySet, DeckError> {
        let mut props = GridPropertySet::new(dims(nx, ny, nz));
        PropertyProcessor::new(props.dims()).process(deck, &mut props)?;
        Ok(props)
    }

    #[test]
    fn data_keyword_loads_whole_grid() {
        let deck = Deck::new().with_keyword(int_data("SATNUM", vec![1, 2, 3, 4]));
        let props = run(&deck, 2, 2, 1).unwrap();
        assert_eq!(props.int_property("SATNUM").unwrap().data(), &[1, 2, 3, 4]);
        assert!(props.has_deck_int_property("SATNUM").unwrap());
    }

    #[test]
    fn box_scopes_data_until_endbox() {
        let deck = Deck::new()
            .with_keyword(box_keyword([1, 2, 1, 2, 2, 2]))
            .with_keyword(double_data("PORO", vec![0.1, 0.2, 0.3, 0.4]))
            .with_keyword(endbox())
            .with_keyword(edit_keyword("MULTIPLY", &[("PORO", 2.0, CURRENT_BOX)]));
        let props = run(&deck, 2, 2, 2).unwrap();
        let poro = props.double_property("PORO").unwrap();
        assert!(poro.data()[..4].iter().all(|v| v.is_nan()));
        assert_eq!(&poro.data()[4..], &[0.2, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn equals_inside_box_only_touches_the_box() {
        let deck = Deck::new()
            .with_keyword(edit_keyword("EQUALS", &[("NTG", 0.5, CURRENT_BOX)]))
            .with_keyword(box_keyword([2, 2, 1, 1, 1, 1]))
            .with_keyword(edit_keyword("EQUALS", &[("NTG", 0.9, CURRENT_BOX)]));
        let props = run(&deck, 3, 1, 1).unwrap();
        assert_eq!(props.double_property("NTG").unwrap().data(), &[0.5, 0.9, 0.5]);
    }

    #[test]
    fn explicit_bounds_override_defaults_per_item() {
        let deck = Deck::new()
            .with_keyword(box_keyword([1, 2, 1, 2, 1, 1]))
            .with_keyword(edit_keyword(
                "EQUALS",
                &[("FIPNUM", 7.0, [Some(2), None, None, None, Some(2), Some(2)])],
            ));
        let props = run(&deck, 2, 2, 2).unwrap();
        let fipnum = props.int_property("FIPNUM").unwrap();
        assert_eq!(fipnum.data(), &[1, 1, 1, 1, 1, 7, 1, 7]);
    }

    #[test]
    fn add_and_multiply_edit_in_order() {
        let deck = Deck::new()
            .with_keyword(edit_keyword("EQUALS", &[("PERMX", 100.0, CURRENT_BOX)]))
            .with_keyword(edit_keyword(
                "ADD",
                &[("PERMX", 10.0, [Some(1), Some(1), None, None, None, None])],
            ))
            .with_keyword(edit_keyword("MULTIPLY", &[("PERMX", 2.0, CURRENT_BOX)]));
        let props = run(&deck, 2, 1, 1).unwrap();
        assert_eq!(props.double_property("PERMX").unwrap().data(), &[220.0, 200.0]);
    }

    #[test]
    fn copy_between_same_type() {
        let deck = Deck::new()
            .with_keyword(double_data("PERMX", vec![1.0, 2.0, 3.0]))
            .with_keyword(copy_keyword(&[
                ("PERMX", "PERMY", CURRENT_BOX),
                ("PERMX", "PERMZ", [Some(3), Some(3), None, None, None, None]),
            ]));
        let props = run(&deck, 3, 1, 1).unwrap();
        assert_eq!(props.double_property("PERMY").unwrap().data(), &[1.0, 2.0, 3.0]);
        let permz = props.double_property("PERMZ").unwrap();
        assert!(permz.get(0).is_nan());
        assert_eq!(permz.get(2), 3.0);
        assert!(props.has_deck_double_property("PERMZ").unwrap());
    }

    #[test]
    fn copy_across_types_is_rejected() {
        let deck = Deck::new()
            .with_keyword(int_data("SATNUM", vec![1, 1]))
            .with_keyword(copy_keyword(&[("SATNUM", "PORO", CURRENT_BOX)]));
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert!(matches!(err, DeckError::MalformedRecord { record: 0, .. }));
    }

    #[test]
    fn copy_from_absent_source_fails() {
        let deck = Deck::new().with_keyword(copy_keyword(&[("PERMX", "PERMY", CURRENT_BOX)]));
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert_eq!(err, DeckError::NotPresent { name: "PERMX".into() });
    }

    #[test]
    fn unsupported_edit_target_is_invalid_argument() {
        let deck = Deck::new().with_keyword(edit_keyword("EQUALS", &[("NOPE", 1.0, CURRENT_BOX)]));
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn box_outside_grid_is_invalid_region() {
        let deck = Deck::new().with_keyword(box_keyword([1, 5, 1, 1, 1, 1]));
        assert!(matches!(run(&deck, 2, 1, 1), Err(DeckError::InvalidRegion { .. })));
    }

    #[test]
    fn region_edits_follow_multnum_by_default() {
        let deck = Deck::new()
            .with_keyword(int_data("MULTNUM", vec![1, 2, 2, 1]))
            .with_keyword(int_data("FLUXNUM", vec![3, 3, 1, 1]))
            .with_keyword(edit_keyword("EQUALS", &[("MULTPV", 1.0, CURRENT_BOX)]))
            .with_keyword(region_keyword("MULTIREG", &[("MULTPV", 4.0, 2, None)]))
            .with_keyword(region_keyword("ADDREG", &[("MULTPV", 0.5, 3, Some("F"))]))
            .with_keyword(region_keyword("EQUALREG", &[("SATNUM", 2.0, 1, Some("M"))]));
        let props = run(&deck, 4, 1, 1).unwrap();
        assert_eq!(props.double_property("MULTPV").unwrap().data(), &[1.5, 4.5, 4.0, 1.0]);
        assert_eq!(props.int_property("SATNUM").unwrap().data(), &[2, 1, 1, 2]);
    }

    #[test]
    fn unknown_region_name_is_malformed() {
        let deck = Deck::new().with_keyword(region_keyword("EQUALREG", &[("NTG", 1.0, 1, Some("X"))]));
        assert!(matches!(run(&deck, 1, 1, 1), Err(DeckError::MalformedRecord { .. })));
    }

    #[test]
    fn multi_record_property_keyword_is_rejected() {
        let deck = Deck::new().with_keyword(
            DeckKeyword::new("PORO")
                .with_record(DeckRecord::data(DeckItem::double("data", vec![0.1, 0.2])))
                .with_record(DeckRecord::data(DeckItem::double("data", vec![0.3, 0.4]))),
        );
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert_eq!(err, DeckError::NotData { name: "PORO".into() });
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn property_keyword_without_literal_data_is_rejected() {
        let keyword = DeckKeyword::new("SATNUM")
            .with_record(DeckRecord::new().with_item(DeckItem::int("REGION", vec![1])));
        let mut props = GridPropertySet::new(dims(1, 1, 1));
        let err = PropertyProcessor::new(props.dims())
            .apply(&keyword, &mut props)
            .unwrap_err();
        assert!(matches!(err, DeckError::NotData { .. }));
        assert!(!props.ints().has("SATNUM"));
    }

    #[test]
    fn integer_edit_overflow_is_an_error() {
        let deck = Deck::new()
            .with_keyword(edit_keyword("EQUALS", &[("FIPNUM", f64::from(i32::MAX), CURRENT_BOX)]))
            .with_keyword(edit_keyword("ADD", &[("FIPNUM", 1.0, CURRENT_BOX)]));
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert!(matches!(err, DeckError::Overflow { cell: 0, .. }));

        let deck = Deck::new()
            .with_keyword(int_data("MULTNUM", vec![1, 2]))
            .with_keyword(int_data("FIPNUM", vec![3, i32::MAX]))
            .with_keyword(region_keyword("MULTIREG", &[("FIPNUM", 2.0, 2, None)]));
        let err = run(&deck, 2, 1, 1).unwrap_err();
        assert!(matches!(err, DeckError::Overflow { cell: 1, .. }));
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        let deck = Deck::new()
            .with_keyword(DeckKeyword::new("RUNSPEC"))
            .with_keyword(double_data("SWOF", vec![0.1, 0.0, 1.0, 0.0]));
        let props = run(&deck, 1, 1, 1).unwrap();
        assert!(props.ints().is_empty());
        assert!(props.doubles().is_empty());
    }

    fn validate(deck: &Deck, props: &GridPropertySet, grid: &ActiveMap) -> Result<(), DeckError> {
        validate_properties(
            deck,
            props,
            grid,
            &ResolveConfig {
                required_properties: Vec::new(),
                ..ResolveConfig::default()
            },
        )
    }

    #[test]
    fn region_numbers_checked_against_tabdims() {
        let grid = ActiveMap::all_active(dims(3, 1, 1));
        let deck = Deck::new()
            .with_keyword(tabdims(2, 1))
            .with_keyword(int_data("SATNUM", vec![1, 2, 3]));
        let props = run(&deck, 3, 1, 1).unwrap();
        assert!(matches!(
            validate(&deck, &props, &grid),
            Err(DeckError::OutOfLimits { cell: 2, .. })
        ));

        let ok = Deck::new()
            .with_keyword(tabdims(3, 1))
            .with_keyword(eqldims(1))
            .with_keyword(int_data("SATNUM", vec![1, 2, 3]))
            .with_keyword(int_data("EQLNUM", vec![1, 1, 1]));
        let props = run(&ok, 3, 1, 1).unwrap();
        validate(&ok, &props, &grid).unwrap();
    }

    #[test]
    fn limits_skipped_without_sizing_keyword() {
        let grid = ActiveMap::all_active(dims(2, 1, 1));
        let deck = Deck::new().with_keyword(int_data("PVTNUM", vec![4, 5]));
        let props = run(&deck, 2, 1, 1).unwrap();
        validate(&deck, &props, &grid).unwrap();
    }

    #[test]
    fn required_property_must_cover_active_cells() {
        let grid = ActiveMap::from_actnum(dims(3, 1, 1), &[1, 1, 0]).unwrap();
        let config = ResolveConfig::default();

        let empty = Deck::new();
        let props = run(&empty, 3, 1, 1).unwrap();
        assert_eq!(
            validate_properties(&empty, &props, &grid, &config),
            Err(DeckError::UnsetCells {
                name: "PORO".into(),
                count: 2,
            })
        );

        let partial = Deck::new().with_keyword(edit_keyword(
            "EQUALS",
            &[("PORO", 0.2, [Some(1), Some(2), None, None, None, None])],
        ));
        let props = run(&partial, 3, 1, 1).unwrap();
        validate_properties(&partial, &props, &grid, &config).unwrap();
    }

    fn arb_grid_and_box() -> impl Strategy<Value = ((usize, usize, usize), [usize; 6])> {
        (1usize..5, 1usize..5, 1usize..4)
            .prop_flat_map(|(nx, ny, nz)| {
                (Just((nx, ny, nz)), 1..=nx, 1..=nx, 1..=ny, 1..=ny, 1..=nz, 1..=nz)
            })
            .prop_map(|(dims, a, b, c, d, e, f)| {
                (dims, [a.min(b), a.max(b), c.min(d), c.max(d), e.min(f), e.max(f)])
            })
    }

    proptest! {
        #[test]
        fn boxed_edits_only_touch_the_box(((nx, ny, nz), bounds) in arb_grid_and_box(), v in -50i32..50) {
            let deck = Deck::new()
                .with_keyword(edit_keyword("EQUALS", &[("FIPNUM", 7.0, CURRENT_BOX)]))
                .with_keyword(box_keyword(bounds))
                .with_keyword(edit_keyword("EQUALS", &[("FIPNUM", f64::from(v), CURRENT_BOX)]))
                .with_keyword(edit_keyword("ADD", &[("FIPNUM", 3.0, CURRENT_BOX)]))
                .with_keyword(edit_keyword("MULTIPLY", &[("FIPNUM", 2.0, CURRENT_BOX)]))
                .with_keyword(endbox());
            let props = run(&deck, nx, ny, nz).unwrap();
            let fipnum = props.int_property("FIPNUM").unwrap();
            let [i1, i2, j1, j2, k1, k2] = bounds;
            for k in 0..nz {
                for j in 0..ny {
                    for i in 0..nx {
                        let inside = (i1 - 1..i2).contains(&i)
                            && (j1 - 1..j2).contains(&j)
                            && (k1 - 1..k2).contains(&k);
                        let expected = if inside { (v + 3) * 2 } else { 7 };
                        prop_assert_eq!(fipnum.get_ijk(i, j, k), expected);
                    }
                }
            }
        }
    }
}
