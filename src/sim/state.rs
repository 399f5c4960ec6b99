//! Game state and core simulation types

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first jump
    Idle,
    /// Active gameplay, timers running
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Pipe,
    Ceiling,
    Ground,
}

impl Crash {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crash::Pipe => "pipe",
            Crash::Ceiling => "ceiling",
            Crash::Ground => "ground",
        }
    }
}

/// Notable things that happened while advancing the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// First jump started the run
    Started,
    PipeSpawned { top_height: f32 },
    Scored { score: u32 },
    GameOver { score: u32, cause: Crash },
}

/// The player's bird. x is fixed (from config), only y moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge, y grows downward
    pub y: f32,
    /// Positive = falling
    pub velocity: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            y: config.bird.position.y,
            velocity: 0.0,
        }
    }
}

/// A top/bottom pipe pair with a gap between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
}

impl Pipe {
    /// Pipe entering at `x` whose gap starts at `top_height`
    pub fn new(x: f32, top_height: f32, config: &GameConfig) -> Self {
        Self {
            x,
            top_height,
            bottom_height: config.game.height - top_height - config.pipe.gap,
        }
    }

    pub fn right_edge(&self, config: &GameConfig) -> f32 {
        self.x + config.pipe.width
    }

    /// y of the bottom pipe's upper edge
    pub fn gap_bottom(&self, config: &GameConfig) -> f32 {
        config.game.height - self.bottom_height
    }

    pub fn gap_center(&self, config: &GameConfig) -> f32 {
        self.top_height + config.pipe.gap / 2.0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Oldest (leftmost) first
    pub pipes: VecDeque<Pipe>,
    pub score: u32,
    /// Physics ticks since the run started
    pub time_ticks: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new idle state with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            bird: Bird::new(&config),
            config,
            phase: GamePhase::Idle,
            pipes: VecDeque::new(),
            score: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Back to the initial idle state. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.time_ticks = 0;
    }

    /// Bird's fixed left edge
    pub fn bird_x(&self) -> f32 {
        self.config.bird.position.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_heights_fill_world() {
        let config = GameConfig::default();
        let pipe = Pipe::new(config.game.width, 100.0, &config);
        assert_eq!(pipe.bottom_height, 350.0);
        assert_eq!(
            pipe.top_height + config.pipe.gap + pipe.bottom_height,
            config.game.height
        );
        assert_eq!(pipe.gap_bottom(&config), 250.0);
        assert_eq!(pipe.gap_center(&config), 175.0);
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.bird.y, 300.0);
        assert_eq!(state.bird.velocity, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.phase = GamePhase::GameOver;
        state.bird = Bird {
            y: 12.0,
            velocity: 4.0,
        };
        state.pipes.push_back(Pipe::new(10.0, 50.0, &state.config));
        state.score = 9;
        state.time_ticks = 400;

        state.reset();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.bird, Bird::new(&state.config));
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
    }
}
