//! Read-only view of a running game.
//!
//! The engine hands out `Snapshot`s through its event queue and the
//! `snapshot()` query; the view layer renders from them and nothing else.
//! Face-down cards are `None` in `faces` — a hidden card's symbol never
//! crosses the boundary, so a renderer (or a cheating client) cannot peek.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, PlayerId};
use crate::deck::Symbol;

/// Immutable read model of the current game state.
///
/// Cloning is cheap: the matched set is a persistent `im` structure and
/// the revealed pair lives inline in a `SmallVec`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The configuration this game was started with.
    pub config: GameConfig,

    /// One entry per board position: `Some(symbol)` for revealed or
    /// matched cards, `None` for face-down cards.
    pub faces: Vec<Option<Symbol>>,

    /// Positions currently face-up but not yet matched (at most 2).
    pub revealed: SmallVec<[usize; 2]>,

    /// Positions permanently face-up.
    pub matched: ImHashSet<usize>,

    /// True while a completed pair awaits resolution; selections are
    /// ignored until it clears.
    pub lock: bool,

    /// Completed pair attempts.
    pub move_count: u32,

    /// Seconds since the first reveal; frozen once the game is won.
    pub elapsed_seconds: u32,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Pairs collected per player, in seat order.
    pub scores: Vec<u32>,

    /// True once every card is matched.
    pub game_over: bool,
}

impl Snapshot {
    /// The face at a position, if it is visible.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&Symbol> {
        self.faces.get(index).and_then(|f| f.as_ref())
    }

    /// Is the card at `index` face-up (revealed or matched)?
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.revealed.contains(&index) || self.matched.contains(&index)
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.faces.len()
    }
}
