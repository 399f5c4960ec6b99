//! Key-value persistence
//!
//! The game only needs two keys: the last player name and the serialized
//! leaderboard. Backends implement [`Storage`]; the browser uses LocalStorage
//! (see `platform`), tests and the native build use [`MemoryStorage`].

use std::collections::HashMap;

use thiserror::Error;

/// Last name entered at the game-over prompt
pub const PLAYER_NAME_KEY: &str = "playerName";
/// Serialized leaderboard (JSON array of `{name, score}`)
pub const BEST_SCORES_KEY: &str = "bestScores";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage rejected write to {key}: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("failed to serialize value")]
    Serialize(#[from] serde_json::Error),
}

/// String key-value store. Writes replace the whole value.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set_item(key, value)
    }
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key (for seeding saved data)
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
