//! # rust-pairs
//!
//! A turn-based memory (concentration) game engine.
//!
//! A board of face-down cards is revealed two at a time. Matching pairs
//! stay revealed and score a point for the active player, who keeps the
//! turn; non-matches flip back and pass the turn on. The engine owns deck
//! construction, the reveal/match/turn state machine, scoring, timing, and
//! win detection — rendering and settings UIs live entirely outside it.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: no rendering, no persistence, no implicit
//!    singleton. A [`GameEngine`] is an ordinary value; create as many as
//!    you like.
//!
//! 2. **Event-driven**: every mutation is a discrete inbound call
//!    (`select_card`, `tick`, `resolve`); every change lands as an owned
//!    [`EngineEvent`] in a queue the host drains.
//!
//! 3. **No hidden timers**: delays are requests through the [`Scheduler`]
//!    seam, stamped with a deal generation so a stale timer can never
//!    mutate a game it was not scheduled for.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `deck`: symbol catalogs and the shuffled pair deck
//! - `engine`: the state machine, scheduler seam, events, snapshots
//!
//! ## Quick start
//!
//! ```
//! use rust_pairs::core::{GameConfig, Theme};
//! use rust_pairs::engine::{EngineEvent, GameEngine, QueuedScheduler};
//!
//! let mut engine = GameEngine::new(QueuedScheduler::new(), 42);
//! engine.new_game(GameConfig::new(2).with_theme(Theme::Numbers)).unwrap();
//!
//! engine.select_card(0).unwrap();
//! engine.select_card(1).unwrap();
//! engine.resolve_pending(); // host decides when delays elapse
//!
//! for event in engine.drain_events() {
//!     match event {
//!         EngineEvent::StateChanged(_snapshot) => { /* re-render */ }
//!         EngineEvent::GameOver(summary) => println!("{summary}"),
//!     }
//! }
//! ```

pub mod core;
pub mod deck;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameConfig, GameRng, GridSize, PlayerId, PlayerMap, Theme, MAX_PLAYERS,
};

pub use crate::deck::{Deck, Symbol};

pub use crate::engine::{
    format_elapsed, EngineEvent, GameEngine, PairOutcome, QueuedScheduler, ResolutionTicket,
    ResultSummary, Scheduler, Snapshot, MATCH_DELAY, MISMATCH_DELAY,
};
