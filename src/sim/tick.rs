//! Simulation steps
//!
//! Each step mutates only the part of the state it owns. None of them check
//! the phase or collisions; the session does that around every step.

use rand::Rng;

use super::state::{GameState, Pipe};
use crate::config::Integration;

/// Advance the bird one physics tick: gravity, then position.
pub fn physics_step(state: &mut GameState) {
    let bird_config = &state.config.bird;
    let bird = &mut state.bird;

    let previous = bird.velocity;
    bird.velocity = (bird.velocity + bird_config.gravity).min(bird_config.max_fall_speed);

    bird.y += match bird_config.integration {
        Integration::SemiImplicit => bird.velocity,
        Integration::Lagged => previous,
    };

    state.time_ticks += 1;
}

/// Override the bird's velocity with the jump impulse
pub fn apply_jump(state: &mut GameState) {
    state.bird.velocity = state.config.bird.jump_strength;
}

/// Append a pipe at the right edge with a random gap position.
/// Returns the top height that was drawn.
pub fn spawn_pipe(state: &mut GameState) -> f32 {
    let range = state.config.top_height_range();
    // Config validation guarantees a non-empty range
    let top_height = state.rng.random_range(0..range.max(1)) as f32;

    let pipe = Pipe::new(state.config.game.width, top_height, &state.config);
    state.pipes.push_back(pipe);
    log::trace!("Pipe spawned: top={} ({} active)", top_height, state.pipes.len());
    top_height
}

/// Scroll every pipe left, then score and drop the head pipe if the bird
/// has fully passed it. At most one pipe is removed per tick.
/// Returns the new score when a pipe was passed.
pub fn scroll_step(state: &mut GameState) -> Option<u32> {
    let speed = state.config.pipe.speed;
    for pipe in state.pipes.iter_mut() {
        pipe.x -= speed;
    }

    let bird_x = state.bird_x();
    let passed = state
        .pipes
        .front()
        .is_some_and(|head| head.right_edge(&state.config) < bird_x);

    if passed {
        state.pipes.pop_front();
        state.score += 1;
        Some(state.score)
    } else {
        None
    }
}
