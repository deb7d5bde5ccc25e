//! Shuffled pair-deck construction.

use tracing::debug;

use super::{symbols, Deck, Symbol};
use crate::core::{EngineError, GameRng, GridSize, Theme};

/// Build a shuffled deck for the given theme and board size.
///
/// Picks `grid_size² / 2` distinct symbols from the theme, duplicates them,
/// and applies a uniform Fisher-Yates permutation from `rng`. Every
/// permutation of the pair multiset is equally likely for a given symbol
/// assignment.
///
/// Pure with respect to its inputs except for the RNG argument: the same
/// RNG state always yields the same deal.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientSymbols`] if the theme catalog cannot
/// supply enough distinct symbols. No partial deck is produced.
pub fn build(theme: Theme, grid_size: GridSize, rng: &mut GameRng) -> Result<Deck, EngineError> {
    let pairs_needed = grid_size.pairs();

    let base: Vec<Symbol> = match theme {
        Theme::Numbers => symbols::number_symbols(pairs_needed),
        Theme::Icons => symbols::icon_symbols(pairs_needed)?,
    };

    let mut cards: Vec<Symbol> = Vec::with_capacity(pairs_needed * 2);
    cards.extend(base.iter().cloned());
    cards.extend(base);
    rng.shuffle(&mut cards);

    debug!(%theme, %grid_size, cards = cards.len(), "deck built");

    Ok(Deck::from_cards(cards))
}
