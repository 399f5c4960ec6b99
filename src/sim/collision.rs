//! Collision detection
//!
//! Axis-aligned boxes only: the bird is a fixed-size rectangle and each pipe
//! is two rectangles sharing a column. Screen coordinates, y grows downward.

use glam::Vec2;

use super::state::{Crash, GameState, Pipe};
use crate::config::GameConfig;

/// Axis-aligned bounding box (`min` = top-left, `max` = bottom-right)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap of the horizontal spans (touching edges don't count)
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right() > left && self.left() < right
    }
}

/// The bird's box at its current height
pub fn bird_bounds(state: &GameState) -> Aabb {
    let bird = &state.config.bird;
    Aabb::new(
        Vec2::new(bird.position.x, state.bird.y),
        Vec2::new(bird.width, bird.height),
    )
}

/// Does the bird box touch either half of the pipe?
pub fn hits_pipe(bird: &Aabb, pipe: &Pipe, config: &GameConfig) -> bool {
    if !bird.overlaps_x(pipe.x, pipe.right_edge(config)) {
        return false;
    }
    bird.top() < pipe.top_height || bird.bottom() > pipe.gap_bottom(config)
}

/// Has the bird left the world vertically?
pub fn out_of_bounds(bird: &Aabb, config: &GameConfig) -> Option<Crash> {
    if bird.top() <= 0.0 {
        Some(Crash::Ceiling)
    } else if bird.bottom() >= config.game.height {
        Some(Crash::Ground)
    } else {
        None
    }
}

/// Check the bird against every pipe and the world bounds.
pub fn detect(state: &GameState) -> Option<Crash> {
    let bird = bird_bounds(state);
    let config = &state.config;

    if state.pipes.iter().any(|pipe| hits_pipe(&bird, pipe, config)) {
        return Some(Crash::Pipe);
    }
    out_of_bounds(&bird, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    fn state_with_pipe(bird_y: f32, pipe_x: f32, top_height: f32) -> GameState {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.bird.y = bird_y;
        let pipe = Pipe::new(pipe_x, top_height, &state.config);
        state.pipes.push_back(pipe);
        state
    }

    #[test]
    fn test_bird_in_gap_column_is_safe() {
        // Gap spans y 100..250, bird spans 150..180, same column
        let state = state_with_pipe(150.0, 40.0, 100.0);
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_bird_above_gap_hits_top_pipe() {
        let state = state_with_pipe(90.0, 40.0, 100.0);
        assert_eq!(detect(&state), Some(Crash::Pipe));
    }

    #[test]
    fn test_bird_below_gap_hits_bottom_pipe() {
        // Bird bottom at 251 > gap bottom 250
        let state = state_with_pipe(221.0, 40.0, 100.0);
        assert_eq!(detect(&state), Some(Crash::Pipe));
    }

    #[test]
    fn test_flush_with_gap_edges_is_safe() {
        // Top exactly at the top pipe's edge
        let state = state_with_pipe(100.0, 40.0, 100.0);
        assert_eq!(detect(&state), None);
        // Bottom exactly at the bottom pipe's edge
        let state = state_with_pipe(220.0, 40.0, 100.0);
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_touching_horizontally_is_not_overlap() {
        // Bird spans x 50..90; pipe starting at 90 only touches
        let state = state_with_pipe(10.0, 90.0, 300.0);
        assert_eq!(detect(&state), None);
        // Pipe ending at 50 (x = -10, width 60) also only touches
        let state = state_with_pipe(10.0, -10.0, 300.0);
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_ceiling_and_ground() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.bird.y = 0.0;
        assert_eq!(detect(&state), Some(Crash::Ceiling));

        state.bird.y = -5.0;
        assert_eq!(detect(&state), Some(Crash::Ceiling));

        // Bottom edge at 600
        state.bird.y = 570.0;
        assert_eq!(detect(&state), Some(Crash::Ground));

        state.bird.y = 569.5;
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_bounds_checked_without_pipes() {
        let mut state = GameState::new(GameConfig::default(), 1);
        assert!(state.pipes.is_empty());
        state.bird.y = 600.0;
        assert_eq!(detect(&state), Some(Crash::Ground));
    }

    #[test]
    fn test_any_pipe_can_hit() {
        let mut state = state_with_pipe(150.0, 500.0, 100.0);
        // Second pipe overlaps the bird with a gap far below it
        let config = state.config;
        state.pipes.push_back(Pipe::new(60.0, 400.0, &config));
        assert_eq!(detect(&state), Some(Crash::Pipe));
    }
}
