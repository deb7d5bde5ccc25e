//! Game configuration types.
//!
//! A game is configured at startup by three knobs:
//! - `Theme`: what the card faces show (icons or numbers)
//! - `GridSize`: board dimensions (4x4 or 6x6)
//! - player count: 1-4 seats
//!
//! `Theme` and `GridSize` are enums, so an invalid theme or grid cannot be
//! constructed; raw values from a settings front-end are checked at the
//! `FromStr`/`TryFrom` boundary. The player count is validated by
//! [`GameConfig::validate`] when a game starts.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::MAX_PLAYERS;

/// Symbol theme for card faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Emoji glyphs from the built-in catalog.
    #[default]
    Icons,
    /// Zero-padded numeric labels ("01", "02", ...).
    Numbers,
}

impl std::str::FromStr for Theme {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "icons" => Ok(Theme::Icons),
            "numbers" => Ok(Theme::Numbers),
            other => Err(EngineError::InvalidConfig {
                reason: format!("unknown theme {other:?}"),
            }),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Icons => write!(f, "icons"),
            Theme::Numbers => write!(f, "numbers"),
        }
    }
}

/// Board dimensions. The board is always square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridSize {
    /// 4x4 board, 16 cards, 8 pairs.
    #[default]
    Four,
    /// 6x6 board, 36 cards, 18 pairs.
    Six,
}

impl GridSize {
    /// Cards per side.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub const fn cards(self) -> usize {
        self.side() * self.side()
    }

    /// Number of distinct symbols needed to fill the board.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.cards() / 2
    }
}

impl TryFrom<u32> for GridSize {
    type Error = EngineError;

    /// Convert a raw side length (as a settings front-end supplies it).
    fn try_from(side: u32) -> Result<Self, Self::Error> {
        match side {
            4 => Ok(GridSize::Four),
            6 => Ok(GridSize::Six),
            other => Err(EngineError::InvalidConfig {
                reason: format!("grid size must be 4 or 6, got {other}"),
            }),
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Complete game configuration. Immutable for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// What the card faces show.
    pub theme: Theme,

    /// Number of players (1-4).
    pub player_count: usize,

    /// Board dimensions.
    pub grid_size: GridSize,
}

impl Default for GameConfig {
    /// The original game's defaults: icons, solo, 4x4.
    fn default() -> Self {
        Self {
            theme: Theme::Icons,
            player_count: 1,
            grid_size: GridSize::Four,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults for the remaining knobs.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Check the player count is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for 0 or more than 4 players.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "player count must be 1-{MAX_PLAYERS}, got {}",
                    self.player_count
                ),
            });
        }
        Ok(())
    }
}
