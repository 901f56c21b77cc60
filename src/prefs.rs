//! Saved setup preferences.
//!
//! The setup screen remembers the last-used player count and names between
//! sessions. Storage is a localStorage-style string key-value store; every
//! failure to read or write is non-fatal and means "no saved preferences".
//!
//! Keys and encoding match the original game: the count as a decimal
//! string, the names as a JSON array, with a fallback parse of the legacy
//! newline-separated format.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::config::SessionConfig;

/// Storage key for the player count.
pub const PLAYER_COUNT_KEY: &str = "ptb_playerCount";
/// Storage key for the player names.
pub const PLAYER_NAMES_KEY: &str = "ptb_playerNames";

/// String key-value store, localStorage style.
///
/// Implementations must not fail loudly: `get` answers `None` for anything
/// unreadable, `set` is best-effort.
pub trait KeyValueStore {
    /// Read a value, `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, best-effort.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Useful for tests and for renderers that manage their
/// own persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store holding one JSON object of string entries.
///
/// The file is read once at open and rewritten on every `set`. A missing or
/// corrupt file opens as an empty store; write errors are swallowed.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at the given path.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn persist(&self) {
        if let Ok(text) = serde_json::to_string_pretty(&self.entries) {
            let _ = fs::write(&self.path, text);
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

/// The remembered setup: player count and names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPrefs {
    pub player_count: usize,
    pub names: Vec<String>,
}

impl Default for PlayerPrefs {
    fn default() -> Self {
        Self {
            player_count: SessionConfig::default().player_count(),
            names: Vec::new(),
        }
    }
}

impl PlayerPrefs {
    /// Load preferences, falling back to defaults for anything missing or
    /// unparseable.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        let defaults = Self::default();

        let player_count = store
            .get(PLAYER_COUNT_KEY)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.player_count);

        let names = match store.get(PLAYER_NAMES_KEY) {
            None => defaults.names,
            Some(raw) => parse_names(&raw),
        };

        Self {
            player_count,
            names,
        }
    }

    /// Save preferences, best-effort.
    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(PLAYER_COUNT_KEY, &self.player_count.to_string());
        if let Ok(json) = serde_json::to_string(&self.names) {
            store.set(PLAYER_NAMES_KEY, &json);
        }
    }

    /// Capture the rememberable part of a configuration.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            player_count: config.player_count(),
            names: config.names().to_vec(),
        }
    }

    /// Build a session configuration from these preferences. Out-of-range
    /// counts get clamped by the config.
    #[must_use]
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig::new(self.player_count).with_names(self.names.clone())
    }
}

/// Names are stored as a JSON array; older saves used one name per line.
fn parse_names(raw: &str) -> Vec<String> {
    if let Ok(names) = serde_json::from_str::<Vec<String>>(raw) {
        return names;
    }
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
