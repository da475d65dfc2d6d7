//! Deck unit systems.

use crate::deck::Deck;
use std::fmt;

/// The unit system a deck declares through its marker keywords.
///
/// The enumeration is total: resolution from a deck either finds a marker
/// or falls back to a caller-supplied default, so downstream constants are
/// never left unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// `METRIC`: bar, metres, days.
    #[default]
    Metric,
    /// `FIELD`: psi, feet, days.
    Field,
}

impl UnitSystem {
    /// Deck marker keyword for this unit system.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Metric => "METRIC",
            Self::Field => "FIELD",
        }
    }

    /// Detect the unit system from marker keywords.
    ///
    /// `FIELD` takes precedence over `METRIC` when a deck carries both.
    /// Returns `None` if neither marker is present.
    pub fn detect(deck: &Deck) -> Option<Self> {
        [Self::Field, Self::Metric]
            .into_iter()
            .find(|system| deck.has_keyword(system.keyword()))
    }

    /// Detect the unit system, falling back to `default` when no marker
    /// is present.
    pub fn from_deck(deck: &Deck, default: Self) -> Self {
        Self::detect(deck).unwrap_or(default)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckKeyword;

    #[test]
    fn detects_markers() {
        let field = Deck::new().with_keyword(DeckKeyword::new("FIELD"));
        let metric = Deck::new().with_keyword(DeckKeyword::new("METRIC"));
        assert_eq!(UnitSystem::detect(&field), Some(UnitSystem::Field));
        assert_eq!(UnitSystem::detect(&metric), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::detect(&Deck::new()), None);
    }

    #[test]
    fn field_wins_over_metric() {
        let both = Deck::new()
            .with_keyword(DeckKeyword::new("METRIC"))
            .with_keyword(DeckKeyword::new("FIELD"));
        assert_eq!(UnitSystem::detect(&both), Some(UnitSystem::Field));
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(
            UnitSystem::from_deck(&Deck::new(), UnitSystem::Field),
            UnitSystem::Field
        );
    }
}
