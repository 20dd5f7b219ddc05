//! Player profile persistence
//!
//! Two independent scalar values under fixed keys:
//! - player name (trimmed, length-capped, defaults to "Player")
//! - high score (non-negative integer, defaults to 0)
//!
//! Writes are fire-and-forget: failures are logged and play continues.
//! Reads never fail; malformed values degrade to defaults.

use std::collections::HashMap;

use thiserror::Error;

use crate::consts::MAX_PLAYER_NAME;

/// Storage key for the player name
pub const PLAYER_NAME_KEY: &str = "jungle_run_player_name_v1";
/// Storage key for the high score
pub const HIGH_SCORE_KEY: &str = "jungle_run_high_score_v1";
/// Name used when none is set
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Storage write failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected write to {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// A string key-value store (LocalStorage on web, memory elsewhere)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Trim and cap a player name, falling back to the default when empty
pub fn normalize_player_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(MAX_PLAYER_NAME).collect()
}

/// Parse a stored high score leniently.
///
/// Accepts integers and decimals (floored), clamps negatives to 0, and maps
/// missing, non-numeric or non-finite values to 0.
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0).floor() as u64,
        _ => {
            log::warn!("Ignoring malformed stored high score {:?}", raw);
            0
        }
    }
}

/// Load the player name (normalized)
pub fn load_player_name(store: &impl KeyValueStore) -> String {
    let name = normalize_player_name(&store.get(PLAYER_NAME_KEY).unwrap_or_default());
    log::info!("Player: {}", name);
    name
}

/// Normalize and store a player name. Returns the name actually stored.
pub fn save_player_name(store: &mut impl KeyValueStore, raw: &str) -> String {
    let name = normalize_player_name(raw);
    if let Err(e) = store.set(PLAYER_NAME_KEY, &name) {
        log::warn!("Failed to save player name: {}", e);
    }
    name
}

/// Load the stored high score
pub fn load_high_score(store: &impl KeyValueStore) -> u64 {
    let score = parse_high_score(store.get(HIGH_SCORE_KEY).as_deref());
    log::info!("Loaded high score {}", score);
    score
}

/// Store a high score
pub fn save_high_score(store: &mut impl KeyValueStore, score: u64) {
    match store.set(HIGH_SCORE_KEY, &score.to_string()) {
        Ok(()) => log::info!("High score saved ({})", score),
        Err(e) => log::warn!("Failed to save high score: {}", e),
    }
}
