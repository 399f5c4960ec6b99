//! Demo mode player
//!
//! Aims for the center of the next gap the bird hasn't cleared yet and jumps
//! whenever it is falling below that line.

use super::state::{GamePhase, GameState};

/// How far below the target line the bird may sink before jumping
const SINK_MARGIN: f32 = 12.0;

/// y the bird's center should aim for
pub fn target_y(state: &GameState) -> f32 {
    let config = &state.config;
    let bird_x = state.bird_x();
    state
        .pipes
        .iter()
        .find(|pipe| pipe.right_edge(config) >= bird_x)
        .map(|pipe| pipe.gap_center(config))
        .unwrap_or(config.game.height / 2.0)
}

/// Should the demo player press jump this frame?
pub fn should_jump(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::GameOver => false,
        GamePhase::Running => {
            let bird_center = state.bird.y + state.config.bird.height / 2.0;
            state.bird.velocity >= 0.0 && bird_center > target_y(state) + SINK_MARGIN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Pipe;

    fn running() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_targets_world_center_without_pipes() {
        assert_eq!(target_y(&running()), 300.0);
    }

    #[test]
    fn test_targets_next_uncleared_gap() {
        let mut state = running();
        let config = state.config;
        // Already behind the bird
        state.pipes.push_back(Pipe::new(-20.0, 0.0, &config));
        state.pipes.push_back(Pipe::new(300.0, 100.0, &config));
        assert_eq!(target_y(&state), 175.0);
    }

    #[test]
    fn test_jumps_when_falling_below_target() {
        let mut state = running();
        state.bird.y = 320.0;
        state.bird.velocity = 1.0;
        assert!(should_jump(&state));

        // Already rising
        state.bird.velocity = -3.0;
        assert!(!should_jump(&state));

        // Above the target
        state.bird.y = 200.0;
        state.bird.velocity = 2.0;
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_phase_handling() {
        let mut state = GameState::new(GameConfig::default(), 5);
        assert!(should_jump(&state));
        state.phase = GamePhase::GameOver;
        state.bird.y = 550.0;
        assert!(!should_jump(&state));
    }
}
