//! The timer seam between the engine and its host.
//!
//! The engine owns no threads and never sleeps. When a pair attempt
//! completes it asks its [`Scheduler`] to run the resolution later, and
//! when the first card of a game is revealed it asks for a one-second tick
//! stream. The hosting application maps these requests onto whatever timer
//! facility it has and feeds them back through
//! [`GameEngine::resolve`](crate::engine::GameEngine::resolve) and
//! [`GameEngine::tick`](crate::engine::GameEngine::tick).
//!
//! ## Stale timers
//!
//! Deferred resolutions are stamped with the engine's generation. A ticket
//! delivered after a `new_game` carries an old generation and is dropped
//! unexecuted, so a late-firing timer can never mutate a game it was not
//! scheduled for. No real cancellation primitive is needed.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Outcome of comparing the two revealed cards' symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Both cards show the same symbol.
    Match,
    /// The cards differ; they flip back face-down.
    Mismatch,
}

/// A generation-stamped handle for one deferred pair resolution.
///
/// Created by the engine, handed to the scheduler, and returned to the
/// engine when the delay elapses. Opaque to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTicket {
    generation: u64,
    outcome: PairOutcome,
}

impl ResolutionTicket {
    pub(crate) fn new(generation: u64, outcome: PairOutcome) -> Self {
        Self {
            generation,
            outcome,
        }
    }

    /// The engine generation this ticket was issued under.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The resolution this ticket will apply.
    #[must_use]
    pub fn outcome(&self) -> PairOutcome {
        self.outcome
    }
}

/// Timer facility the engine drives.
///
/// Implementations do not call back into the engine; they record (or
/// schedule) the request, and the host later invokes `resolve`/`tick` on
/// the engine itself. This keeps the engine free of callback cycles and
/// makes the seam trivial to fake in tests.
pub trait Scheduler {
    /// Arrange for `GameEngine::resolve(ticket)` to run after `delay`.
    fn defer(&mut self, delay: Duration, ticket: ResolutionTicket);

    /// Start or stop the one-second stream feeding `GameEngine::tick`.
    ///
    /// Called with `true` on the first reveal of a game, with `false` when
    /// the game is won or replaced.
    fn set_ticking(&mut self, ticking: bool);
}

/// In-memory scheduler for tests and synchronous hosts.
///
/// Requests queue up in FIFO order; the host pops them and feeds them back
/// to the engine whenever it decides the delay has "elapsed". Letting a
/// popped ticket outlive a `new_game` is exactly how the stale-timer tests
/// force a race.
#[derive(Clone, Debug, Default)]
pub struct QueuedScheduler {
    queue: VecDeque<(Duration, ResolutionTicket)>,
    ticking: bool,
}

impl QueuedScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the tick stream currently requested?
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Number of resolutions waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop the oldest deferred resolution, if any.
    pub fn pop(&mut self) -> Option<(Duration, ResolutionTicket)> {
        self.queue.pop_front()
    }
}

impl Scheduler for QueuedScheduler {
    fn defer(&mut self, delay: Duration, ticket: ResolutionTicket) {
        self.queue.push_back((delay, ticket));
    }

    fn set_ticking(&mut self, ticking: bool) {
        self.ticking = ticking;
    }
}
