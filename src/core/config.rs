//! Session configuration.
//!
//! A `SessionConfig` carries everything chosen on the setup screen: how many
//! players, their names, the starting wake chance, and how much each poke
//! raises it. Out-of-range values are clamped rather than rejected, matching
//! the sliders and number inputs that produce them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Minimum players at the table.
pub const MIN_PLAYERS: usize = 2;
/// Maximum players at the table.
pub const MAX_PLAYERS: usize = 12;
/// Probability ceiling (percent).
pub const MAX_PROBABILITY: u8 = 100;
/// Minimum per-poke escalation (percent).
pub const MIN_INCREMENT: u8 = 1;
/// Maximum per-poke escalation (percent).
pub const MAX_INCREMENT: u8 = 20;
/// Fixed wake-chance relief from a lullaby (percent).
pub const LULLABY_RELIEF: u8 = 10;

/// Configuration for a session.
///
/// Built with clamping setters; a `SessionConfig` is always in range.
/// The engine keeps the config across `reset()` so the next game starts
/// from the same setup.
///
/// ## Example
///
/// ```
/// use sleeping_bear::core::SessionConfig;
///
/// let config = SessionConfig::new(4)
///     .with_names(["Ada", "", "Basil"])
///     .with_initial_probability(5)
///     .with_increment(3);
///
/// assert_eq!(config.player_count(), 4);
/// assert_eq!(config.display_name(sleeping_bear::core::PlayerId::new(2)), "Player 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    player_count: usize,
    names: Vec<String>,
    initial_probability: u8,
    increment: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            names: Vec::new(),
            initial_probability: 1,
            increment: 1,
        }
    }
}

impl SessionConfig {
    /// Create a configuration for `player_count` players, clamped to [2, 12].
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::default().with_player_count(player_count)
    }

    /// Set the player count, clamped to [2, 12].
    ///
    /// Names for seats beyond the new count are kept; they come back if the
    /// count is raised again, like the setup screen preserving typed names.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self
    }

    /// Set display names. Entries are trimmed; blanks fall back to
    /// "Player {n}" at lookup time.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .collect();
        self
    }

    /// Set the starting wake chance, clamped to [0, 100].
    #[must_use]
    pub fn with_initial_probability(mut self, percent: u8) -> Self {
        self.initial_probability = percent.min(MAX_PROBABILITY);
        self
    }

    /// Set the per-poke escalation, clamped to [1, 20].
    #[must_use]
    pub fn with_increment(mut self, percent: u8) -> Self {
        self.increment = percent.clamp(MIN_INCREMENT, MAX_INCREMENT);
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Starting wake chance (percent).
    #[must_use]
    pub fn initial_probability(&self) -> u8 {
        self.initial_probability
    }

    /// Per-poke escalation (percent).
    #[must_use]
    pub fn increment(&self) -> u8 {
        self.increment
    }

    /// Configured names, as set (possibly blank or shorter than the count).
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Display name for a player: the configured name, or "Player {n}" if
    /// none was given.
    #[must_use]
    pub fn display_name(&self, player: PlayerId) -> String {
        match self.names.get(player.index()) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => player.default_name(),
        }
    }
}
