//! The game engine: reveal/match/turn state machine, scoring, timing, and
//! win detection.
//!
//! ## Event flow
//!
//! All mutations happen in response to discrete inbound calls:
//!
//! - `new_game` / `restart` — deal a fresh board
//! - `select_card` — a player taps a card
//! - `resolve` — a deferred pair resolution fires
//! - `tick` — one second elapsed
//!
//! After each mutation the engine appends a [`EngineEvent::StateChanged`]
//! carrying a [`Snapshot`]; the host drains the queue and re-renders. The
//! engine never blocks and never touches presentation.
//!
//! ## The lock window
//!
//! Between the second card of a pair going face-up and the deferred
//! resolution, `lock` is set and selections are silently ignored. That is
//! the engine's only blocking window, and it blocks selections only — the
//! caller returns immediately.

use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, trace};

use super::events::{EngineEvent, ResultSummary};
use super::scheduler::{PairOutcome, ResolutionTicket, Scheduler};
use super::snapshot::Snapshot;
use crate::core::{EngineError, GameConfig, GameRng, PlayerId, PlayerMap};
use crate::deck::{self, Deck};

/// Delay before a matched pair settles: long enough to see the match,
/// short enough not to stall play.
pub const MATCH_DELAY: Duration = Duration::from_millis(300);

/// Delay before a mismatched pair flips back: enough time to memorize
/// both faces.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(800);

/// State of one game in progress.
struct Game {
    config: GameConfig,
    deck: Deck,
    revealed: SmallVec<[usize; 2]>,
    matched: im::HashSet<usize>,
    lock: bool,
    move_count: u32,
    elapsed_seconds: u32,
    timer_started: bool,
    won: bool,
    current_player: PlayerId,
    scores: PlayerMap<u32>,
}

impl Game {
    fn fresh(config: GameConfig, deck: Deck) -> Self {
        Self {
            config,
            deck,
            revealed: SmallVec::new(),
            matched: im::HashSet::new(),
            lock: false,
            move_count: 0,
            elapsed_seconds: 0,
            timer_started: false,
            won: false,
            current_player: PlayerId::new(0),
            scores: PlayerMap::with_value(config.player_count, 0),
        }
    }

    fn is_won(&self) -> bool {
        self.matched.len() == self.deck.len()
    }

    fn snapshot(&self) -> Snapshot {
        let faces = self
            .deck
            .iter()
            .map(|(i, symbol)| {
                if self.revealed.contains(&i) || self.matched.contains(&i) {
                    Some(symbol.clone())
                } else {
                    None
                }
            })
            .collect();

        Snapshot {
            config: self.config,
            faces,
            revealed: self.revealed.clone(),
            matched: self.matched.clone(),
            lock: self.lock,
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            current_player: self.current_player,
            scores: self.scores.values().to_vec(),
            game_over: self.won,
        }
    }

    fn summary(&self) -> ResultSummary {
        if self.config.player_count == 1 {
            ResultSummary::solo(self.elapsed_seconds, self.move_count, self.deck.pair_count())
        } else {
            ResultSummary::multi(self.scores.values().to_vec())
        }
    }
}

/// The memory game engine.
///
/// Owns all mutable game state and a [`Scheduler`] for its two resolution
/// delays and the one-second tick stream. An engine is an ordinary value:
/// whatever composes the application owns it, and independent instances
/// coexist freely (each test gets its own).
///
/// ## Example
///
/// ```
/// use rust_pairs::core::GameConfig;
/// use rust_pairs::engine::{GameEngine, QueuedScheduler};
///
/// let mut engine = GameEngine::new(QueuedScheduler::new(), 42);
/// engine.new_game(GameConfig::default()).unwrap();
///
/// engine.select_card(0).unwrap();
/// let snapshot = engine.snapshot().unwrap();
/// assert!(snapshot.face(0).is_some());
/// assert!(snapshot.face(1).is_none());
/// ```
pub struct GameEngine<S: Scheduler> {
    scheduler: S,
    rng: GameRng,
    /// Bumped on every deal; stale tickets carry an older value.
    generation: u64,
    game: Option<Game>,
    events: Vec<EngineEvent>,
}

impl<S: Scheduler> GameEngine<S> {
    /// Create an inert engine with a deterministic seed.
    ///
    /// The engine accepts no selections until [`new_game`](Self::new_game).
    #[must_use]
    pub fn new(scheduler: S, seed: u64) -> Self {
        Self {
            scheduler,
            rng: GameRng::new(seed),
            generation: 0,
            game: None,
            events: Vec::new(),
        }
    }

    /// Create an inert engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy(scheduler: S) -> Self {
        Self {
            scheduler,
            rng: GameRng::from_entropy(),
            generation: 0,
            game: None,
            events: Vec::new(),
        }
    }

    /// Start a game, replacing any game in progress.
    ///
    /// Resets every counter, deals a fresh shuffled deck, stops the tick
    /// stream, and bumps the generation so pending timers from the old
    /// game die on arrival.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfig`] for an out-of-range player count,
    /// [`EngineError::InsufficientSymbols`] if the theme cannot fill the
    /// board. On error no game starts and existing state is untouched.
    pub fn new_game(&mut self, config: GameConfig) -> Result<(), EngineError> {
        config.validate()?;

        let mut deal_rng = self.rng.fork();
        let deck = deck::build(config.theme, config.grid_size, &mut deal_rng)?;

        self.generation += 1;
        self.scheduler.set_ticking(false);
        self.game = Some(Game::fresh(config, deck));

        debug!(
            generation = self.generation,
            players = config.player_count,
            grid = %config.grid_size,
            "new game"
        );

        self.push_state_changed();
        Ok(())
    }

    /// Start a fresh game with the current game's configuration.
    ///
    /// New deal, zeroed scores, moves, and timer.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfig`] if no game was ever started.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let config = self
            .game
            .as_ref()
            .map(|g| g.config)
            .ok_or_else(|| EngineError::InvalidConfig {
                reason: "no game to restart".to_string(),
            })?;

        self.new_game(config)
    }

    /// A player selects the card at `index`.
    ///
    /// Reveals the card; on the second card of a pair, locks the board,
    /// counts the move, and defers the match/mismatch resolution through
    /// the scheduler. Selections while locked, of an already revealed
    /// card, or of a matched card are silent no-ops (no event, no error):
    /// they arise naturally from double clicks racing pending flips.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if `index` is outside the deck
    /// (including before the first game). The error never mutates state —
    /// the view layer only ever passes indices it rendered, so this is a
    /// caller bug, not a game condition.
    pub fn select_card(&mut self, index: usize) -> Result<(), EngineError> {
        let Some(game) = self.game.as_mut() else {
            return Err(EngineError::IndexOutOfRange { index, deck_len: 0 });
        };

        if index >= game.deck.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                deck_len: game.deck.len(),
            });
        }

        if game.lock || game.revealed.contains(&index) || game.matched.contains(&index) {
            trace!(index, lock = game.lock, "selection ignored");
            return Ok(());
        }

        // First-ever reveal of this game starts the clock.
        if !game.timer_started {
            game.timer_started = true;
            self.scheduler.set_ticking(true);
        }

        game.revealed.push(index);

        if game.revealed.len() == 2 {
            game.lock = true;
            game.move_count += 1;

            let (a, b) = (game.revealed[0], game.revealed[1]);
            let outcome = if game.deck.symbol(a) == game.deck.symbol(b) {
                PairOutcome::Match
            } else {
                PairOutcome::Mismatch
            };
            let delay = match outcome {
                PairOutcome::Match => MATCH_DELAY,
                PairOutcome::Mismatch => MISMATCH_DELAY,
            };

            debug!(a, b, ?outcome, move_count = game.move_count, "pair attempt");
            self.scheduler
                .defer(delay, ResolutionTicket::new(self.generation, outcome));
        }

        self.push_state_changed();
        Ok(())
    }

    /// Apply a deferred pair resolution.
    ///
    /// A ticket whose generation differs from the engine's current
    /// generation belongs to a replaced game and is dropped unexecuted.
    pub fn resolve(&mut self, ticket: ResolutionTicket) {
        if ticket.generation() != self.generation {
            debug!(
                stale = ticket.generation(),
                current = self.generation,
                "stale resolution dropped"
            );
            return;
        }

        let Some(game) = self.game.as_mut() else {
            return;
        };
        if !game.lock || game.revealed.len() != 2 {
            // Same generation but nothing pending: a double-delivered
            // ticket. Nothing to resolve.
            return;
        }

        let summary = match ticket.outcome() {
            PairOutcome::Match => {
                for &i in &game.revealed {
                    game.matched.insert(i);
                }
                game.scores[game.current_player] += 1;
                game.revealed.clear();
                game.lock = false;
                // Matching grants an extra turn: current_player stays.

                game.won = game.is_won();
                game.won.then(|| game.summary())
            }
            PairOutcome::Mismatch => {
                game.revealed.clear();
                game.lock = false;
                if game.config.player_count > 1 {
                    game.current_player = game.current_player.next(game.config.player_count);
                }
                None
            }
        };

        if summary.is_some() {
            self.scheduler.set_ticking(false);
        }

        self.push_state_changed();

        if let Some(summary) = summary {
            debug!(%summary, "game over");
            self.events.push(EngineEvent::GameOver(summary));
        }
    }

    /// One second elapsed.
    ///
    /// Counts only while a game is running, its clock has started, and it
    /// is not yet won; any other tick is a stale leftover and is ignored.
    pub fn tick(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if !game.timer_started || game.won {
            trace!("tick ignored");
            return;
        }

        game.elapsed_seconds += 1;
        trace!(elapsed = game.elapsed_seconds, "tick");
        self.push_state_changed();
    }

    /// Read-only view of the current game, or `None` before the first
    /// game. Hidden cards do not leak their symbols.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Game::snapshot)
    }

    /// Is every card matched?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(Game::is_won)
    }

    /// Take all events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// The current deal generation. Bumped by every `new_game`/`restart`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The scheduler this engine drives.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that poll it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn push_state_changed(&mut self) {
        if let Some(game) = self.game.as_ref() {
            self.events.push(EngineEvent::StateChanged(game.snapshot()));
        }
    }
}

impl GameEngine<super::scheduler::QueuedScheduler> {
    /// Fire every queued resolution in order.
    ///
    /// Convenience for synchronous hosts and tests; equivalent to the
    /// host popping tickets itself once their delays elapse.
    pub fn resolve_pending(&mut self) {
        while let Some((_, ticket)) = self.scheduler.pop() {
            self.resolve(ticket);
        }
    }
}
