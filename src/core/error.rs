//! Engine error types.
//!
//! Only three things can go wrong from the outside:
//! - a config with an out-of-range player count or grid side
//! - a theme catalog too small for the requested board
//! - a selection index outside the deck (a caller contract violation;
//!   the view layer must only pass indices it rendered)
//!
//! Duplicate selections, selections of matched cards, and selections while
//! the board is locked are *not* errors: they arise naturally from double
//! clicks racing pending flip-backs, and the engine ignores them silently.

/// Errors surfaced by [`crate::engine::GameEngine`] and the deck builder.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The configuration cannot start a game.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the rejected knob.
        reason: String,
    },

    /// The theme's symbol catalog cannot fill the requested board.
    #[error("theme {theme} has {available} symbols, board needs {needed}")]
    InsufficientSymbols {
        /// The theme whose catalog came up short.
        theme: crate::core::Theme,
        /// Symbols the catalog provides.
        available: usize,
        /// Distinct symbols the board requires.
        needed: usize,
    },

    /// A selection index outside the deck.
    #[error("card index {index} out of range for a deck of {deck_len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Current deck length (0 before the first game).
        deck_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theme;

    #[test]
    fn test_error_display() {
        let err = EngineError::IndexOutOfRange {
            index: 20,
            deck_len: 16,
        };
        assert_eq!(
            err.to_string(),
            "card index 20 out of range for a deck of 16"
        );

        let err = EngineError::InsufficientSymbols {
            theme: Theme::Icons,
            available: 10,
            needed: 18,
        };
        assert_eq!(err.to_string(), "theme icons has 10 symbols, board needs 18");
    }
}
