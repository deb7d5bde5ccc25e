//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks the deck builder and the game
//! engine share. Nothing here knows about boards or turns.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GridSize, Theme};
pub use error::EngineError;
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
