//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (driven by the scheduler's millisecond clock)
//! - Seeded RNG only
//! - Pipes kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bird_bounds, detect};
pub use scheduler::{Scheduler, Task};
pub use session::Session;
pub use state::{Bird, Crash, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{apply_jump, physics_step, scroll_step, spawn_pipe};
