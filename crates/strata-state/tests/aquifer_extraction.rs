//! Integration test: Carter-Tracy aquifers through `DeckState::resolve`.
//!
//! Influence tables are built from the deck's own `AQUTAB` keyword and
//! handed to the resolver, the way a table manager would.

use strata_core::{Deck, DeckError, DeckKeyword, TableCollection, UnitSystem};
use strata_state::aquifer::{DEFAULT_INFLUENCE_PI, DEFAULT_INFLUENCE_TD};
use strata_state::{DeckState, ResolveConfig, ResolveError};
use strata_test_utils::fixtures::{aquct_keyword, aqutab_keyword};
use strata_test_utils::{edit_keyword, grid, AquctFixture, CURRENT_BOX};

fn deck_with(aquifers: &[AquctFixture], units: Option<&str>) -> Deck {
    let mut deck = Deck::new();
    if let Some(units) = units {
        deck.push(DeckKeyword::new(units));
    }
    deck.push(edit_keyword("EQUALS", &[("PORO", 0.3, CURRENT_BOX)]));
    deck.push(aqutab_keyword(&[vec![0.01, 0.1, 1.0, 0.8, 10.0, 1.6]]));
    deck.push(aquct_keyword(aquifers));
    deck
}

fn resolve(deck: &Deck, config: &ResolveConfig) -> Result<DeckState, ResolveError> {
    let aqutab = deck.keyword("AQUTAB").expect("fixture deck has AQUTAB");
    let tables = TableCollection::from_keyword(aqutab, 2).unwrap();
    DeckState::resolve(deck, &grid(2, 2, 1), &tables, config)
}

#[test]
fn sentinel_and_table_ids_resolve_to_curves() {
    let deck = deck_with(
        &[
            AquctFixture::with_id(1),
            AquctFixture {
                influence_table: 2,
                ..AquctFixture::with_id(2)
            },
        ],
        Some("METRIC"),
    );
    let state = resolve(&deck, &ResolveConfig::default()).unwrap();
    let aquifers = state.aquifers();
    assert_eq!(aquifers.len(), 2);

    let first = &aquifers.aquifers()[0];
    assert_eq!(first.td, DEFAULT_INFLUENCE_TD);
    assert_eq!(first.pi, DEFAULT_INFLUENCE_PI);

    let second = &aquifers.aquifers()[1];
    assert_eq!(second.td, vec![0.01, 1.0, 10.0]);
    assert_eq!(second.pi, vec![0.1, 0.8, 1.6]);
    assert_eq!(aquifers.influence_table_id(1), Some(2));
}

#[test]
fn unit_fallback_applies_to_constants() {
    let deck = deck_with(&[AquctFixture::default()], None);
    let config = ResolveConfig {
        default_unit_system: UnitSystem::Field,
        ..ResolveConfig::default()
    };
    let state = resolve(&deck, &config).unwrap();
    assert_eq!(state.unit_system(), UnitSystem::Field);
    assert_eq!(state.aquifers().aquifers()[0].c1, 0.006328 * 1.5797e5);
}

#[test]
fn dangling_influence_table_fails_resolution() {
    let deck = deck_with(
        &[AquctFixture {
            influence_table: 5,
            ..AquctFixture::default()
        }],
        Some("METRIC"),
    );
    let err = resolve(&deck, &ResolveConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::Deck(DeckError::MissingTable {
            table_id: 5,
            available: 1,
        })
    );
}
