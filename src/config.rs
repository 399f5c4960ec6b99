//! Game configuration
//!
//! Loaded once from JSON, validated, then passed read-only into the
//! simulation. Field names follow the JSON shape (`bird.maxFallSpeed`, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bundled configuration (`config.json` at the crate root)
pub const DEFAULT_CONFIG_JSON: &str = include_str!("../config.json");

/// Configuration rejected at load time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("pipe.gap ({gap}) must be smaller than game.height ({height})")]
    GapTooLarge { gap: f32, height: f32 },
    #[error("bird.jumpStrength must be negative (upward), got {0}")]
    JumpNotUpward(f32),
    #[error("pipe.interval must be at least 1 ms")]
    ZeroInterval,
    #[error("bird ({x}, {y}) with size {width}x{height} does not start inside the world")]
    BirdOutsideWorld {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// How the physics step applies velocity to position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Integration {
    /// Position moves by the velocity computed this tick
    #[default]
    SemiImplicit,
    /// Position moves by the velocity from before this tick's gravity
    Lagged,
}

/// World dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Bird placement and physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdConfig {
    /// Fixed x and starting y
    pub position: Position,
    #[serde(default = "default_bird_width")]
    pub width: f32,
    #[serde(default = "default_bird_height")]
    pub height: f32,
    /// Velocity added per tick
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Velocity set on jump (negative = up)
    pub jump_strength: f32,
    #[serde(default)]
    pub integration: Integration,
}

/// Pipe geometry and timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeConfig {
    pub gap: f32,
    pub width: f32,
    /// Pixels scrolled per tick
    pub speed: f32,
    /// Milliseconds between spawns
    pub interval: u32,
}

/// Complete, validated game configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game: WorldConfig,
    pub bird: BirdConfig,
    pub pipe: PipeConfig,
}

fn default_bird_width() -> f32 {
    40.0
}

fn default_bird_height() -> f32 {
    30.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game: WorldConfig {
                width: 800.0,
                height: 600.0,
            },
            bird: BirdConfig {
                position: Position { x: 50.0, y: 300.0 },
                width: default_bird_width(),
                height: default_bird_height(),
                gravity: 0.5,
                max_fall_speed: 10.0,
                jump_strength: -8.0,
                integration: Integration::SemiImplicit,
            },
            pipe: PipeConfig {
                gap: 150.0,
                width: 60.0,
                speed: 3.0,
                interval: 2000,
            },
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "Config loaded: world {}x{}, gap {}, interval {}ms",
            config.game.width,
            config.game.height,
            config.pipe.gap,
            config.pipe.interval
        );
        Ok(config)
    }

    /// The config shipped with the game
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG_JSON)
    }

    /// Reject configs that would produce a degenerate world
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("bird.position.x", self.bird.position.x),
            ("bird.position.y", self.bird.position.y),
            ("bird.gravity", self.bird.gravity),
            ("bird.jumpStrength", self.bird.jump_strength),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("game.width", self.game.width),
            ("game.height", self.game.height),
            ("bird.width", self.bird.width),
            ("bird.height", self.bird.height),
            ("bird.maxFallSpeed", self.bird.max_fall_speed),
            ("pipe.gap", self.pipe.gap),
            ("pipe.width", self.pipe.width),
            ("pipe.speed", self.pipe.speed),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.bird.gravity < 0.0 {
            return Err(ConfigError::Negative {
                field: "bird.gravity",
                value: self.bird.gravity,
            });
        }

        if self.bird.jump_strength >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.bird.jump_strength));
        }

        if self.pipe.interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        // Spawning draws an integer top height from [0, height - gap)
        if self.top_height_range() == 0 {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe.gap,
                height: self.game.height,
            });
        }

        let bird = &self.bird;
        let inside = bird.position.x >= 0.0
            && bird.position.x + bird.width <= self.game.width
            && bird.position.y > 0.0
            && bird.position.y + bird.height < self.game.height;
        if !inside {
            return Err(ConfigError::BirdOutsideWorld {
                x: bird.position.x,
                y: bird.position.y,
                width: bird.width,
                height: bird.height,
            });
        }

        Ok(())
    }

    /// Number of integer top heights a spawned pipe can take
    pub fn top_height_range(&self) -> u32 {
        let span = (self.game.height - self.pipe.gap).ceil();
        if span >= 1.0 { span as u32 } else { 0 }
    }
}
