//! Session state and the read model handed to renderers.
//!
//! ## GameSession
//!
//! One game from start to the bear waking (or a reset): the shuffled turn
//! order, the risk state, per-player lullaby flags, the poke counter, and
//! the append-only event log. Created by `GameEngine::start`, discarded by
//! `GameEngine::reset`.
//!
//! ## Snapshot
//!
//! A serializable view of the session after any operation. The rendering
//! layer consumes snapshots and holds no game logic of its own; it is also
//! responsible for disabling controls whose preconditions are unmet.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::SessionConfig;
use super::event::GameEvent;
use super::player::{PlayerId, PlayerMap};
use super::rng::RandomSource;
use crate::risk::RiskState;

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No session; configuration may be edited.
    Setup,
    /// A session is running.
    InProgress,
    /// The bear woke; only `reset()` mutates from here.
    Ended,
}

/// All state for one game.
pub struct GameSession {
    config: SessionConfig,
    /// Permutation of all player identities, fixed at start.
    turn_order: SmallVec<[PlayerId; 12]>,
    current_turn_index: usize,
    risk: RiskState,
    has_poked_this_turn: bool,
    /// Sticky within the session: once set, never cleared.
    lullaby_used: PlayerMap<bool>,
    poke_count: u32,
    log: Vector<GameEvent>,
    loser: Option<PlayerId>,
}

impl GameSession {
    /// Start a fresh session: shuffle the turn order and reset all volatile
    /// state from the config.
    #[must_use]
    pub fn new(config: SessionConfig, rng: &mut impl RandomSource) -> Self {
        let count = config.player_count();

        let mut turn_order: SmallVec<[PlayerId; 12]> = PlayerId::all(count).collect();
        rng.shuffle(&mut turn_order);

        let risk = RiskState::new(config.initial_probability(), config.increment());

        Self {
            config,
            turn_order,
            current_turn_index: 0,
            risk,
            has_poked_this_turn: false,
            lullaby_used: PlayerMap::with_value(count, false),
            poke_count: 0,
            log: Vector::new(),
            loser: None,
        }
    }

    /// The configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// True until the bear wakes.
    #[must_use]
    pub fn active(&self) -> bool {
        self.loser.is_none()
    }

    /// The shuffled turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn_order[self.current_turn_index]
    }

    /// Display name for a player, falling back to "Player {n}".
    #[must_use]
    pub fn display_name(&self, player: PlayerId) -> String {
        self.config.display_name(player)
    }

    /// The risk state.
    #[must_use]
    pub fn risk(&self) -> &RiskState {
        &self.risk
    }

    pub(crate) fn risk_mut(&mut self) -> &mut RiskState {
        &mut self.risk
    }

    /// Whether the current player has survived a poke this turn.
    #[must_use]
    pub fn has_poked_this_turn(&self) -> bool {
        self.has_poked_this_turn
    }

    /// Whether a player has sung their lullaby this session.
    #[must_use]
    pub fn lullaby_used(&self, player: PlayerId) -> bool {
        self.lullaby_used[player]
    }

    /// Total pokes this session, including the one that wakes the bear.
    #[must_use]
    pub fn poke_count(&self) -> u32 {
        self.poke_count
    }

    /// The append-only event log.
    #[must_use]
    pub fn log(&self) -> &Vector<GameEvent> {
        &self.log
    }

    /// The losing player, once the bear has woken.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.loser
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.log.push_back(event);
    }

    pub(crate) fn count_poke(&mut self) {
        self.poke_count += 1;
    }

    pub(crate) fn mark_poked(&mut self) {
        self.has_poked_this_turn = true;
    }

    pub(crate) fn mark_lullaby_used(&mut self, player: PlayerId) {
        self.lullaby_used[player] = true;
    }

    pub(crate) fn record_loss(&mut self, player: PlayerId) {
        self.loser = Some(player);
    }

    /// Move to the next seat in the fixed order.
    pub(crate) fn advance_turn(&mut self) {
        self.has_poked_this_turn = false;
        self.current_turn_index = (self.current_turn_index + 1) % self.turn_order.len();
    }

    /// Build the read model for this session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let phase = if self.active() {
            Phase::InProgress
        } else {
            Phase::Ended
        };
        let current = self.current_player();

        let seats = self
            .turn_order
            .iter()
            .map(|&player| SeatView {
                player,
                name: self.display_name(player),
                lullaby_used: self.lullaby_used[player],
                is_current: self.active() && player == current,
            })
            .collect();

        Snapshot {
            phase,
            active: self.active(),
            seats,
            current_player: if self.active() { Some(current) } else { None },
            probability: self.risk.current(),
            risk_label: self.risk.band().label().to_string(),
            has_poked_this_turn: self.has_poked_this_turn,
            poke_count: self.poke_count,
            log: self.log.iter().map(|e| e.to_string()).collect(),
            loser: self.loser,
        }
    }
}

/// One seat in the turn order, as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub name: String,
    pub lullaby_used: bool,
    pub is_current: bool,
}

/// Read model exposed after every operation.
///
/// Everything a renderer needs: seats in turn order with the current marker,
/// the wake chance and its label, the rendered log lines, and the loser once
/// the game has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub active: bool,
    /// Seats in turn order. Empty during `Setup`.
    pub seats: Vec<SeatView>,
    pub current_player: Option<PlayerId>,
    /// Current wake chance; during `Setup`, the configured starting chance.
    pub probability: u8,
    pub risk_label: String,
    /// Whether the end-turn action is currently legal.
    pub has_poked_this_turn: bool,
    pub poke_count: u32,
    /// Rendered log lines, oldest first.
    pub log: Vec<String>,
    pub loser: Option<PlayerId>,
}
