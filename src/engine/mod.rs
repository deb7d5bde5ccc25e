//! The game engine: state machine, timer seam, events, snapshots.

pub mod events;
pub mod game;
pub mod scheduler;
pub mod snapshot;

pub use events::{format_elapsed, EngineEvent, ResultSummary};
pub use game::{GameEngine, MATCH_DELAY, MISMATCH_DELAY};
pub use scheduler::{PairOutcome, QueuedScheduler, ResolutionTicket, Scheduler};
pub use snapshot::Snapshot;
