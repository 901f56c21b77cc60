//! # sleeping-bear
//!
//! Core engine for a local push-your-luck party game: players take turns
//! poking a sleeping bear, and every poke raises the chance that the bear
//! wakes up and eats the poker.
//!
//! ## Design Principles
//!
//! 1. **One owned session**: all game state lives in a `GameSession` held by
//!    the engine. Construction and reset are explicit lifecycle transitions,
//!    not ambient globals.
//!
//! 2. **Explicit results**: illegal operations return `ActionError` instead
//!    of silently doing nothing, so callers and tests can tell rejection
//!    from success.
//!
//! 3. **Injectable randomness**: the engine is generic over `RandomSource`.
//!    `GameRng` (ChaCha8) gives deterministic play from a seed;
//!    `SequenceSource` scripts exact draws for tests.
//!
//! 4. **Snapshots, not callbacks**: after any operation the engine hands
//!    back a serializable `Snapshot`; rendering is an external collaborator
//!    with no game logic.
//!
//! ## The rules in one paragraph
//!
//! 2-12 players are shuffled into a fixed turn order. The current player may
//! poke (a uniform draw in [0, 100) against the wake chance; surviving
//! raises the chance by the configured increment, clamped at 100), may keep
//! poking, and ends their turn once they have survived at least one poke.
//! Each player may instead sing one lullaby per game, lowering the chance by
//! 10 and ending the turn immediately. Whoever wakes the bear loses.
//!
//! ## Modules
//!
//! - `core`: player IDs, random sources, configuration, events, session state
//! - `engine`: the state machine (`start`, `poke`, `end_turn`, `lullaby`,
//!   `reset`)
//! - `risk`: wake-chance escalation and the risk-label bands
//! - `flavor`: the restless-bear flavor pool
//! - `prefs`: remembered setup preferences (player count and names)

pub mod core;
pub mod engine;
pub mod flavor;
pub mod prefs;
pub mod risk;

// Re-export the public surface.
pub use crate::core::{
    GameEvent, GameRng, GameSession, Phase, PlayerId, PlayerMap, RandomSource, SeatView,
    SequenceSource, SessionConfig, Snapshot,
};

pub use crate::engine::{ActionError, GameEngine, PokeOutcome};

pub use crate::risk::{RiskBand, RiskState};

pub use crate::prefs::{JsonFileStore, KeyValueStore, MemoryStore, PlayerPrefs};
