//! Deck construction: symbol catalogs and the shuffled pair deck.
//!
//! A deck is an ordered sequence of `grid_size²` symbols in which every
//! symbol appears exactly twice. It is built once per game by
//! [`builder::build`] and never reshuffled in place; the engine reveals and
//! hides positions, the deck itself stays immutable.

pub mod builder;
pub mod symbols;

use serde::{Deserialize, Serialize};

pub use builder::build;

/// A card face symbol: an emoji glyph or a zero-padded numeric label.
///
/// Two deck positions holding equal symbols form a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, immutable sequence of paired symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Wrap a card sequence. Callers go through [`builder::build`]; this
    /// constructor exists for tests that need a fixed layout.
    #[must_use]
    pub fn from_cards(cards: Vec<Symbol>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for the empty deck (an engine before its first game).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// The symbol at a position, or `None` out of range.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<&Symbol> {
        self.cards.get(index)
    }

    /// Iterate over positions and symbols.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Symbol)> {
        self.cards.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_deck() -> Deck {
        Deck::from_cards(
            ["a", "b", "a", "b"].into_iter().map(Symbol::new).collect(),
        )
    }

    #[test]
    fn test_deck_accessors() {
        let deck = fixed_deck();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.symbol(0), Some(&Symbol::new("a")));
        assert_eq!(deck.symbol(4), None);
    }

    #[test]
    fn test_symbol_equality() {
        assert_eq!(Symbol::new("01"), Symbol::new("01"));
        assert_ne!(Symbol::new("01"), Symbol::new("02"));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("🐶").to_string(), "🐶");
        assert_eq!(format!("{}", Symbol::new("07")), "07");
    }
}
