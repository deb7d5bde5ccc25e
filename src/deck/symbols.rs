//! Symbol catalogs for the two themes.
//!
//! The icon catalog is fixed at 36 glyphs so it can fill the largest board
//! (6x6 needs 18 distinct symbols; 36 leaves headroom for re-theming).
//! Numeric labels are generated on demand and zero-padded to two digits so
//! every face renders at the same width.

use super::Symbol;
use crate::core::{EngineError, Theme};

/// Fixed glyph catalog for [`Theme::Icons`].
pub const ICONS: [&str; 36] = [
    "🐶", "🐱", "🐻", "🦊", "🐸", "🐼", "🐷", "🐵", "🦁", "🐯", "🐨", "🐰",
    "🦉", "🐙", "🐢", "🦄", "🐝", "🦋", "🌸", "🍀", "🍎", "🍋", "🍇", "🍉",
    "⚽️", "🏀", "🚗", "✈️", "🎲", "🎧", "💎", "🧩", "⭐️", "🌙", "☂️", "🔥",
];

/// The first `pairs_needed` glyphs from the icon catalog.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientSymbols`] if the catalog is shorter
/// than `pairs_needed`.
pub fn icon_symbols(pairs_needed: usize) -> Result<Vec<Symbol>, EngineError> {
    if ICONS.len() < pairs_needed {
        return Err(EngineError::InsufficientSymbols {
            theme: Theme::Icons,
            available: ICONS.len(),
            needed: pairs_needed,
        });
    }

    Ok(ICONS[..pairs_needed].iter().map(|&s| Symbol::new(s)).collect())
}

/// `pairs_needed` distinct zero-padded numeric labels: "01", "02", ...
///
/// Generation is deterministic, so the numbers theme can never run out.
pub fn number_symbols(pairs_needed: usize) -> Vec<Symbol> {
    (1..=pairs_needed)
        .map(|n| Symbol::new(format!("{n:02}")))
        .collect()
}
