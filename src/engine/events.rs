//! Outbound notifications and the win summary.
//!
//! The engine appends events to an internal queue after every mutation;
//! the view layer drains the queue and re-renders. Events own their data
//! (snapshots, summaries) so a frontend can ship them across a thread or
//! wasm boundary without touching the engine again.

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use crate::core::PlayerId;

/// A notification from the engine to its view layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// State changed; render from the carried snapshot.
    StateChanged(Snapshot),
    /// Every pair is matched; show the win screen.
    GameOver(ResultSummary),
}

/// What the win screen reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultSummary {
    /// Solo game: how fast and in how many moves.
    Solo {
        /// Seconds from first reveal to final match.
        elapsed_seconds: u32,
        /// Completed pair attempts.
        move_count: u32,
        /// Pairs on the board.
        total_pairs: usize,
    },
    /// Multiplayer game: the score table with the top scorers flagged.
    Multi {
        /// Pairs collected per player, in seat order.
        scores: Vec<u32>,
        /// Every player holding the maximum score. Ties all appear here;
        /// there is deliberately no tiebreaker.
        winners: Vec<PlayerId>,
    },
}

impl ResultSummary {
    /// Build a solo summary.
    #[must_use]
    pub fn solo(elapsed_seconds: u32, move_count: u32, total_pairs: usize) -> Self {
        Self::Solo {
            elapsed_seconds,
            move_count,
            total_pairs,
        }
    }

    /// Build a multiplayer summary, flagging all holders of the top score.
    #[must_use]
    pub fn multi(scores: Vec<u32>) -> Self {
        let max = scores.iter().copied().max().unwrap_or(0);
        let winners = scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == max)
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect();

        Self::Multi { scores, winners }
    }

    /// Did this player finish with the top score?
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            ResultSummary::Solo { .. } => player == PlayerId::new(0),
            ResultSummary::Multi { winners, .. } => winners.contains(&player),
        }
    }
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSummary::Solo {
                elapsed_seconds,
                move_count,
                total_pairs,
            } => write!(
                f,
                "time {} / {move_count} moves / {total_pairs} pairs",
                format_elapsed(*elapsed_seconds)
            ),
            ResultSummary::Multi { scores, winners } => {
                for (i, score) in scores.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let player = PlayerId::new(i as u8);
                    let marker = if winners.contains(&player) { "*" } else { "" };
                    write!(f, "{player}: {score}{marker}")?;
                }
                Ok(())
            }
        }
    }
}

/// Format an elapsed-seconds counter as `m:ss`.
///
/// ```
/// use rust_pairs::engine::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(83), "1:23");
/// assert_eq!(format_elapsed(600), "10:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
