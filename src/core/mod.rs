//! Core engine types: players, randomness, configuration, events, state.
//!
//! These are the fundamental building blocks; the rules live in
//! `crate::engine`.

pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    SessionConfig, LULLABY_RELIEF, MAX_INCREMENT, MAX_PLAYERS, MAX_PROBABILITY, MIN_INCREMENT,
    MIN_PLAYERS,
};
pub use event::GameEvent;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, SequenceSource};
pub use state::{GameSession, Phase, SeatView, Snapshot};
