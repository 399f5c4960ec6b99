//! Flappy Web - a Flappy Bird style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, timers)
//! - `config`: Validated game configuration
//! - `leaderboard`: Persisted top-10 best scores
//! - `persistence`: Key-value storage abstraction
//! - `renderer`: Scene building and Canvas 2D drawing
//! - `platform`: Browser-specific backends

pub mod config;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardStore};
pub use persistence::{MemoryStorage, Storage};
pub use sim::{GameEvent, GamePhase, Session};

/// Game timing constants
pub mod consts {
    /// Physics and scroll tick interval (50 Hz)
    pub const TICK_MS: u32 = 20;
    /// Longest frame fed to the simulation; anything longer is dropped
    pub const MAX_FRAME_MS: f64 = 250.0;
}
