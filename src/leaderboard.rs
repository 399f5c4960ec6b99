//! Best-scores leaderboard
//!
//! Persisted under `bestScores` as a JSON array of `{name, score}`,
//! sorted by score (highest first), top 10 only.

use serde::{Deserialize, Serialize};

use crate::persistence::{BEST_SCORES_KEY, PLAYER_NAME_KEY, PersistenceError, Storage};

/// Maximum number of entries kept
pub const MAX_ENTRIES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Ranked list of best scores
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring sort order and cap
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Read the persisted leaderboard. Missing or malformed data yields an
    /// empty board.
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        let Some(json) = storage.get_item(BEST_SCORES_KEY) else {
            log::info!("No saved scores, starting fresh");
            return Self::new();
        };

        match serde_json::from_str::<Vec<LeaderboardEntry>>(&json) {
            Ok(entries) => {
                let board = Self::from_entries(entries);
                log::info!("Loaded {} best scores", board.len());
                board
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", BEST_SCORES_KEY, e);
                Self::new()
            }
        }
    }

    /// Write the board under `bestScores`
    pub fn persist<S: Storage + ?Sized>(&self, storage: &mut S) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(self)?;
        storage.set_item(BEST_SCORES_KEY, &json)
    }

    /// Add an entry, keeping the board sorted and capped.
    /// Returns the 1-indexed rank, or None if it fell off the end.
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
        });

        // Stable sort: the new entry lands after existing ones with the
        // same score, so its rank counts itself plus every score >= it.
        let rank = self.entries.iter().filter(|e| e.score >= score).count();
        self.normalize();

        (rank <= MAX_ENTRIES).then_some(rank)
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// Leaderboard bound to a storage backend
pub struct LeaderboardStore<S: Storage> {
    storage: S,
    board: Leaderboard,
}

impl<S: Storage> LeaderboardStore<S> {
    /// Open the store and load the saved board
    pub fn open(storage: S) -> Self {
        let board = Leaderboard::load(&storage);
        Self { storage, board }
    }

    /// Re-read the board from storage
    pub fn load(&mut self) -> &Leaderboard {
        self.board = Leaderboard::load(&self.storage);
        &self.board
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    /// Name to pre-fill in the game-over prompt
    pub fn last_player_name(&self) -> String {
        self.storage.get_item(PLAYER_NAME_KEY).unwrap_or_default()
    }

    /// Append a score, persist the new board and the player name.
    ///
    /// The in-memory board is updated even if the backend rejects the write,
    /// so the player still sees their score this session.
    pub fn save(&mut self, name: &str, score: u32) -> &Leaderboard {
        let rank = self.board.insert(name, score);

        if let Err(e) = self.storage.set_item(PLAYER_NAME_KEY, name) {
            log::warn!("Could not remember player name: {}", e);
        }
        match self.board.persist(&mut self.storage) {
            Ok(()) => match rank {
                Some(rank) => log::info!("{} scored {} (rank #{})", name, score, rank),
                None => log::info!("{} scored {} (not ranked)", name, score),
            },
            Err(e) => log::warn!("Best scores not saved: {}", e),
        }

        &self.board
    }

    /// Save a finished run if the player gave a name. Blank or missing
    /// names skip the save and leave the board unchanged.
    pub fn record(&mut self, name: Option<&str>, score: u32) -> Option<&Leaderboard> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        match name {
            Some(name) => Some(self.save(name, score)),
            None => {
                log::info!("No name entered, score {} not saved", score);
                None
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
