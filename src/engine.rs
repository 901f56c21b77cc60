//! The game engine: one state machine, explicit results.
//!
//! `GameEngine` owns the session and the random source and exposes the five
//! operations of the game: `start`, `poke`, `end_turn`, `lullaby`, `reset`.
//! Every operation that has preconditions returns a `Result`, so callers can
//! tell "nothing happened because the move was illegal" apart from
//! "succeeded"; the original UI relied on disabled buttons and silent
//! returns instead.
//!
//! ## Example
//!
//! ```
//! use sleeping_bear::{GameEngine, PokeOutcome, SessionConfig};
//!
//! let mut engine = GameEngine::new(42);
//! engine.start(SessionConfig::new(4).with_initial_probability(5));
//!
//! match engine.poke().unwrap() {
//!     PokeOutcome::Survived { probability } => {
//!         assert!(probability >= 5);
//!         engine.end_turn().unwrap();
//!     }
//!     PokeOutcome::Woke { loser } => {
//!         assert_eq!(engine.snapshot().loser, Some(loser));
//!     }
//! }
//! ```

use crate::core::config::SessionConfig;
use crate::core::event::GameEvent;
use crate::core::player::PlayerId;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameSession, Phase, Snapshot};
use crate::flavor;
use crate::risk::RiskBand;

/// Why an operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// No session is running.
    NotStarted,
    /// The bear already woke; only `reset()` is allowed.
    GameOver,
    /// `end_turn()` needs at least one surviving poke first.
    NoPokeThisTurn,
    /// The current player already sang their lullaby this session.
    LullabySpent,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ActionError::NotStarted => "no session is running",
            ActionError::GameOver => "the game is over",
            ActionError::NoPokeThisTurn => "the current player has not poked this turn",
            ActionError::LullabySpent => "the current player already used their lullaby",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ActionError {}

/// Outcome of a poke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PokeOutcome {
    /// The bear slept on. `probability` is the escalated wake chance.
    Survived { probability: u8 },
    /// The bear woke; the session is over.
    Woke { loser: PlayerId },
}

/// The turn-based state machine driving a game.
///
/// Generic over the random source so tests can script exact draws; defaults
/// to the deterministic `GameRng`.
pub struct GameEngine<R: RandomSource = GameRng> {
    config: SessionConfig,
    session: Option<GameSession>,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Create an engine with a seeded deterministic RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_source(GameRng::from_entropy())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with an explicit random source.
    #[must_use]
    pub fn with_source(rng: R) -> Self {
        Self {
            config: SessionConfig::default(),
            session: None,
            rng,
        }
    }

    /// The configuration the next `start` without arguments would use.
    /// Preserved across `reset()`.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::Setup,
            Some(session) if session.active() => Phase::InProgress,
            Some(_) => Phase::Ended,
        }
    }

    /// The running (or ended) session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Start a fresh session from the given configuration.
    ///
    /// Replaces any existing session. Nothing leaks from a prior game except
    /// the configuration itself: the turn order is reshuffled, lullaby flags
    /// and the log are cleared, and the poke counter returns to zero.
    pub fn start(&mut self, config: SessionConfig) {
        self.config = config.clone();
        self.session = Some(GameSession::new(config, &mut self.rng));
    }

    /// Start a fresh session from the stored configuration.
    pub fn restart(&mut self) {
        self.start(self.config.clone());
    }

    /// The current player pokes the bear.
    ///
    /// Draws uniformly in [0, 100) against the current wake chance. On a
    /// survival the chance escalates by the configured increment (clamped at
    /// 100) and a flavor line lands in the log. On a wake the poking player
    /// loses and the session ends.
    ///
    /// Poking more than once per turn is allowed by design: each poke
    /// escalates the chance further before the turn is handed on.
    pub fn poke(&mut self) -> Result<PokeOutcome, ActionError> {
        let session = self.session.as_mut().ok_or(ActionError::NotStarted)?;
        if !session.active() {
            return Err(ActionError::GameOver);
        }

        let player = session.current_player();
        let name = session.display_name(player);
        session.count_poke();

        // The log records the chance in effect at draw time.
        let chance = session.risk().current();
        let woke = self.rng.roll_percent() < chance;
        session.push_event(GameEvent::Poked {
            name: name.clone(),
            probability: chance,
            woke,
        });

        if woke {
            session.push_event(GameEvent::Eaten { name });
            session.record_loss(player);
            return Ok(PokeOutcome::Woke { loser: player });
        }

        session.mark_poked();
        let probability = session.risk_mut().escalate();
        session.push_event(GameEvent::ChanceNow { probability });
        session.push_event(GameEvent::Restless {
            line: flavor::pick(&mut self.rng),
        });

        Ok(PokeOutcome::Survived { probability })
    }

    /// End the current player's turn.
    ///
    /// Requires at least one surviving poke this turn.
    pub fn end_turn(&mut self) -> Result<(), ActionError> {
        let session = self.session.as_mut().ok_or(ActionError::NotStarted)?;
        if !session.active() {
            return Err(ActionError::GameOver);
        }
        if !session.has_poked_this_turn() {
            return Err(ActionError::NoPokeThisTurn);
        }

        let name = session.display_name(session.current_player());
        session.push_event(GameEvent::TurnEnded { name });
        session.advance_turn();
        Ok(())
    }

    /// The current player sings their lullaby.
    ///
    /// Once per player per session: lowers the wake chance by 10 (floored at
    /// 0) and ends the turn unconditionally, poke or no poke.
    pub fn lullaby(&mut self) -> Result<(), ActionError> {
        let session = self.session.as_mut().ok_or(ActionError::NotStarted)?;
        if !session.active() {
            return Err(ActionError::GameOver);
        }

        let player = session.current_player();
        if session.lullaby_used(player) {
            return Err(ActionError::LullabySpent);
        }

        session.mark_lullaby_used(player);
        let probability = session.risk_mut().relieve();
        let name = session.display_name(player);
        session.push_event(GameEvent::Lullaby {
            name: name.clone(),
            probability,
        });
        session.push_event(GameEvent::TurnEnded { name });
        session.advance_turn();
        Ok(())
    }

    /// Discard the session and return to `Setup`, keeping the configuration.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Read model after any operation.
    ///
    /// During `Setup` the snapshot previews the configured starting chance
    /// and its risk label, with no seats and an empty log.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        match &self.session {
            Some(session) => session.snapshot(),
            None => Snapshot {
                phase: Phase::Setup,
                active: false,
                seats: Vec::new(),
                current_player: None,
                probability: self.config.initial_probability(),
                risk_label: RiskBand::from_probability(self.config.initial_probability())
                    .label()
                    .to_string(),
                has_poked_this_turn: false,
                poke_count: 0,
                log: Vec::new(),
                loser: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceSource;

    /// Engine with identity turn order (Player 1 first) and scripted rolls.
    fn scripted(rolls: impl IntoIterator<Item = u8>) -> GameEngine<SequenceSource> {
        GameEngine::with_source(SequenceSource::new(rolls))
    }

    fn two_player_config() -> SessionConfig {
        SessionConfig::new(2)
            .with_names(["A", "B"])
            .with_initial_probability(0)
            .with_increment(10)
    }

    #[test]
    fn test_phase_transitions() {
        let mut engine = scripted([99, 0]);
        assert_eq!(engine.phase(), Phase::Setup);

        engine.start(two_player_config());
        assert_eq!(engine.phase(), Phase::InProgress);

        // First poke survives (99 >= 0), second wakes (0 < 10).
        engine.poke().unwrap();
        engine.poke().unwrap();
        assert_eq!(engine.phase(), Phase::Ended);

        engine.reset();
        assert_eq!(engine.phase(), Phase::Setup);
    }

    #[test]
    fn test_poke_before_start_rejected() {
        let mut engine = scripted([]);
        assert_eq!(engine.poke(), Err(ActionError::NotStarted));
        assert_eq!(engine.end_turn(), Err(ActionError::NotStarted));
        assert_eq!(engine.lullaby(), Err(ActionError::NotStarted));
    }

    #[test]
    fn test_survival_escalates() {
        let mut engine = scripted([50]);
        engine.start(two_player_config());

        let outcome = engine.poke().unwrap();
        assert_eq!(outcome, PokeOutcome::Survived { probability: 10 });
        assert_eq!(engine.snapshot().probability, 10);
    }

    #[test]
    fn test_zero_chance_never_wakes() {
        // A roll of 0 against chance 0: 0 < 0 is false.
        let mut engine = scripted([0]);
        engine.start(two_player_config());

        let outcome = engine.poke().unwrap();
        assert_eq!(outcome, PokeOutcome::Survived { probability: 10 });
    }

    #[test]
    fn test_wake_records_loser_and_ends() {
        let mut engine = scripted([99, 5]);
        engine.start(two_player_config());

        engine.poke().unwrap();
        engine.end_turn().unwrap();

        // Player 2 now pokes at chance 10; roll 5 wakes the bear.
        let outcome = engine.poke().unwrap();
        assert_eq!(
            outcome,
            PokeOutcome::Woke {
                loser: PlayerId::new(2)
            }
        );

        let snapshot = engine.snapshot();
        assert!(!snapshot.active);
        assert_eq!(snapshot.loser, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_everything_rejected_after_game_over() {
        let mut engine = scripted([0]);
        engine.start(
            SessionConfig::new(2)
                .with_initial_probability(100)
                .with_increment(1),
        );

        let PokeOutcome::Woke { .. } = engine.poke().unwrap() else {
            panic!("poke at 100% must wake the bear");
        };

        assert_eq!(engine.poke(), Err(ActionError::GameOver));
        assert_eq!(engine.end_turn(), Err(ActionError::GameOver));
        assert_eq!(engine.lullaby(), Err(ActionError::GameOver));
    }

    #[test]
    fn test_end_turn_requires_poke() {
        let mut engine = scripted([]);
        engine.start(two_player_config());

        assert_eq!(engine.end_turn(), Err(ActionError::NoPokeThisTurn));

        engine.poke().unwrap();
        engine.end_turn().unwrap();
        assert_eq!(engine.snapshot().current_player, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_multiple_pokes_per_turn_escalate_each_time() {
        // Intentional rule: the turn holder may keep poking, and every poke
        // raises the chance before the next draw.
        let mut engine = scripted([]);
        engine.start(two_player_config());

        engine.poke().unwrap();
        engine.poke().unwrap();
        engine.poke().unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.probability, 30);
        assert_eq!(snapshot.current_player, Some(PlayerId::new(1)));
        assert_eq!(snapshot.poke_count, 3);
    }

    #[test]
    fn test_lullaby_relieves_and_advances_without_poke() {
        let mut engine = scripted([]);
        engine.start(
            SessionConfig::new(2)
                .with_initial_probability(25)
                .with_increment(5),
        );

        engine.lullaby().unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.probability, 15);
        assert_eq!(snapshot.current_player, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_lullaby_floors_at_zero() {
        let mut engine = scripted([]);
        engine.start(
            SessionConfig::new(2)
                .with_initial_probability(5)
                .with_increment(5),
        );

        engine.lullaby().unwrap();
        assert_eq!(engine.snapshot().probability, 0);
    }

    #[test]
    fn test_lullaby_once_per_player() {
        let mut engine = scripted([]);
        engine.start(two_player_config());

        engine.lullaby().unwrap(); // Player 1
        engine.lullaby().unwrap(); // Player 2, back to Player 1

        assert_eq!(engine.lullaby(), Err(ActionError::LullabySpent));

        // The flag shows up in the read model too.
        let snapshot = engine.snapshot();
        assert!(snapshot.seats.iter().all(|s| s.lullaby_used));
    }

    #[test]
    fn test_reset_keeps_config_drops_session() {
        let mut engine = scripted([]);
        let config = two_player_config();
        engine.start(config.clone());
        engine.poke().unwrap();
        engine.lullaby().unwrap();

        engine.reset();

        assert_eq!(engine.config(), &config);
        assert!(engine.session().is_none());

        engine.restart();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.poke_count, 0);
        assert!(snapshot.log.is_empty());
        assert!(snapshot.seats.iter().all(|s| !s.lullaby_used));
        assert_eq!(snapshot.probability, 0);
    }

    #[test]
    fn test_setup_snapshot_previews_risk_label() {
        let mut engine = scripted([]);
        engine.start(two_player_config());
        engine.reset();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.phase, Phase::Setup);
        assert!(snapshot.seats.is_empty());
        assert_eq!(snapshot.risk_label, "Low risk");
    }

    #[test]
    fn test_log_lines_match_table_messages() {
        let mut engine = scripted([99, 3]);
        engine.start(
            SessionConfig::new(2)
                .with_names(["Ada", "Basil"])
                .with_initial_probability(4)
                .with_increment(6),
        );

        engine.poke().unwrap();
        engine.end_turn().unwrap();
        engine.poke().unwrap(); // roll 3 < 10 wakes the bear

        let log = engine.snapshot().log;
        assert_eq!(log[0], "Ada poked: survived. Chance was 4%");
        assert_eq!(log[1], "Chance now 10%");
        // log[2] is a flavor line from the restless pool.
        assert_eq!(log[3], "Ada ended turn.");
        assert_eq!(log[4], "Basil poked: the bear woke up! Chance was 10%");
        assert_eq!(log[5], "Basil was eaten! Game Over.");
    }

    #[test]
    fn test_poke_count_includes_waking_poke() {
        let mut engine = scripted([0]);
        engine.start(
            SessionConfig::new(2)
                .with_initial_probability(100)
                .with_increment(1),
        );

        let _ = engine.poke().unwrap();
        assert_eq!(engine.snapshot().poke_count, 1);
    }

    #[test]
    fn test_seeded_engine_is_deterministic() {
        let run = || {
            let mut engine = GameEngine::new(1234);
            engine.start(
                SessionConfig::new(6)
                    .with_initial_probability(30)
                    .with_increment(20),
            );
            let mut outcomes = Vec::new();
            loop {
                match engine.poke() {
                    Ok(PokeOutcome::Survived { probability }) => {
                        outcomes.push(probability);
                        engine.end_turn().unwrap();
                    }
                    Ok(PokeOutcome::Woke { loser }) => return (outcomes, loser),
                    Err(e) => panic!("unexpected rejection: {}", e),
                }
            }
        };

        assert_eq!(run(), run());
    }
}
