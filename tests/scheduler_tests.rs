//! Timer and stale-callback tests.
//!
//! The queue scheduler stands in for the host's timer facility: tickets
//! sit in its queue until a test decides the delay has elapsed, which is
//! exactly how a timer race is forced across a `new_game`.

use std::collections::HashMap;

use rust_pairs::core::{GameConfig, PlayerId, Theme};
use rust_pairs::engine::{GameEngine, QueuedScheduler, MISMATCH_DELAY};

fn new_engine(seed: u64, config: GameConfig) -> GameEngine<QueuedScheduler> {
    let mut engine = GameEngine::new(QueuedScheduler::new(), seed);
    engine.new_game(config).unwrap();
    engine
}

/// Where each pair sits in the first deal of `seed`/`config`.
fn pair_layout(seed: u64, config: GameConfig) -> Vec<(usize, usize)> {
    let mut scout = new_engine(seed, config);
    let cards = scout.snapshot().unwrap().card_count();

    let mut by_symbol: HashMap<String, Vec<usize>> = HashMap::new();
    for i in 0..cards {
        scout.select_card(i).unwrap();
        let face = scout
            .snapshot()
            .unwrap()
            .face(i)
            .expect("just-selected card must be face-up")
            .as_str()
            .to_string();
        by_symbol.entry(face).or_default().push(i);
        scout.resolve_pending();
    }

    by_symbol.into_values().map(|p| (p[0], p[1])).collect()
}

/// The timer race: a mismatch resolution left pending across a
/// `new_game` must not mutate the new game's state.
#[test]
fn test_stale_mismatch_timer_cannot_touch_new_game() {
    let config = GameConfig::new(2).with_theme(Theme::Numbers);
    let pairs = pair_layout(42, config);
    let mut engine = new_engine(42, config);

    // Leave a mismatch ticket pending in the queue.
    engine.select_card(pairs[0].0).unwrap();
    engine.select_card(pairs[1].0).unwrap();
    let (delay, stale) = engine.scheduler_mut().pop().unwrap();
    assert_eq!(delay, MISMATCH_DELAY);

    // Replace the game, then make one selection in the new game.
    engine.new_game(config).unwrap();
    engine.select_card(0).unwrap();
    engine.drain_events();
    let before = engine.snapshot().unwrap();

    // The old timer finally fires.
    engine.resolve(stale);

    let after = engine.snapshot().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.current_player, PlayerId::new(0));
    assert_eq!(after.revealed.as_slice(), &[0]);
    assert!(!after.lock);
    assert!(engine.drain_events().is_empty());
}

/// Every deal bumps the generation, so tickets from any earlier deal are
/// stale regardless of how many games have passed.
#[test]
fn test_generation_bumps_per_deal() {
    let config = GameConfig::default();
    let mut engine = GameEngine::new(QueuedScheduler::new(), 1);

    assert_eq!(engine.generation(), 0);
    engine.new_game(config).unwrap();
    assert_eq!(engine.generation(), 1);
    engine.new_game(config).unwrap();
    assert_eq!(engine.generation(), 2);
    engine.restart().unwrap();
    assert_eq!(engine.generation(), 3);
}

/// A ticket delivered twice resolves once; the duplicate is a no-op.
#[test]
fn test_double_delivered_ticket() {
    let config = GameConfig::new(2).with_theme(Theme::Numbers);
    let pairs = pair_layout(3, config);
    let mut engine = new_engine(3, config);

    engine.select_card(pairs[0].0).unwrap();
    engine.select_card(pairs[1].0).unwrap();
    let (_, ticket) = engine.scheduler_mut().pop().unwrap();

    engine.resolve(ticket);
    let before = engine.snapshot().unwrap();
    assert_eq!(before.current_player, PlayerId::new(1));

    engine.resolve(ticket);
    assert_eq!(engine.snapshot().unwrap(), before);
}

/// The tick stream starts on the first reveal, stops on a win, and the
/// frozen counter survives stray late ticks.
#[test]
fn test_tick_stream_lifecycle() {
    let config = GameConfig::new(1).with_theme(Theme::Numbers);
    let pairs = pair_layout(12, config);
    let mut engine = new_engine(12, config);

    assert!(!engine.scheduler().is_ticking());

    engine.select_card(pairs[0].0).unwrap();
    assert!(engine.scheduler().is_ticking());

    engine.tick();
    engine.select_card(pairs[0].1).unwrap();
    engine.tick();
    engine.resolve_pending();

    // Sweep the remaining pairs.
    for &(a, b) in pairs.iter().skip(1) {
        engine.select_card(a).unwrap();
        engine.select_card(b).unwrap();
        engine.resolve_pending();
    }

    assert!(engine.is_game_over());
    assert!(!engine.scheduler().is_ticking());

    let elapsed = engine.snapshot().unwrap().elapsed_seconds;
    assert_eq!(elapsed, 2);

    // The host's ticker may race the stop signal; late ticks are inert.
    engine.tick();
    engine.tick();
    assert_eq!(engine.snapshot().unwrap().elapsed_seconds, elapsed);
}

/// A new game stops the previous game's tick stream until its own first
/// reveal.
#[test]
fn test_new_game_stops_ticking() {
    let config = GameConfig::default();
    let mut engine = new_engine(15, config);

    engine.select_card(0).unwrap();
    assert!(engine.scheduler().is_ticking());

    engine.new_game(config).unwrap();
    assert!(!engine.scheduler().is_ticking());

    // A stray tick between new_game and the first reveal counts nothing.
    engine.tick();
    assert_eq!(engine.snapshot().unwrap().elapsed_seconds, 0);
}
