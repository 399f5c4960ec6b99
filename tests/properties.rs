//! Invariants that must hold for any input

use flappy_web::config::GameConfig;
use flappy_web::leaderboard::{Leaderboard, LeaderboardStore, MAX_ENTRIES};
use flappy_web::persistence::MemoryStorage;
use flappy_web::sim::{GameEvent, GamePhase, GameState, Session, physics_step, spawn_pipe};
use proptest::prelude::*;

proptest! {
    #[test]
    fn velocity_never_exceeds_max_fall_speed(
        start_velocity in -50.0f32..50.0,
        gravity in 0.0f32..5.0,
        max_fall_speed in 0.5f32..30.0,
        ticks in 1usize..200,
    ) {
        let mut config = GameConfig::default();
        config.bird.gravity = gravity;
        config.bird.max_fall_speed = max_fall_speed;

        let mut state = GameState::new(config, 1);
        state.bird.velocity = start_velocity;
        for _ in 0..ticks {
            physics_step(&mut state);
            prop_assert!(state.bird.velocity <= max_fall_speed);
        }
    }

    #[test]
    fn spawned_pipes_fill_world_height(
        seed in any::<u64>(),
        height in 100.0f32..1000.0,
        gap_fraction in 0.05f32..0.95,
    ) {
        let mut config = GameConfig::default();
        config.game.height = height;
        config.pipe.gap = (height * gap_fraction).floor().max(1.0);
        let gap = config.pipe.gap;

        let mut state = GameState::new(config, seed);
        for _ in 0..50 {
            let top = spawn_pipe(&mut state);
            let pipe = *state.pipes.back().unwrap();
            prop_assert!(top >= 0.0 && top < height - gap);
            prop_assert_eq!(top.fract(), 0.0);
            prop_assert!((pipe.top_height + gap + pipe.bottom_height - height).abs() < 1e-3);
        }
    }

    #[test]
    fn leaderboard_stays_sorted_and_capped(
        saves in prop::collection::vec(("[a-z]{1,8}", 0u32..100), 0..40),
    ) {
        let mut store = LeaderboardStore::open(MemoryStorage::new());
        let mut all: Vec<(String, u32)> = Vec::new();

        for (name, score) in &saves {
            let board = store.save(name, *score);
            prop_assert!(board.len() <= MAX_ENTRIES);
            prop_assert!(board.entries().windows(2).all(|w| w[0].score >= w[1].score));
            all.push((name.clone(), *score));
        }

        // Same as a stable sort of everything ever saved, cut to ten
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.truncate(MAX_ENTRIES);
        let kept: Vec<(String, u32)> = store
            .leaderboard()
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.score))
            .collect();
        prop_assert_eq!(kept, all);

        // And what was persisted reads back identically
        let reloaded = Leaderboard::load(store.storage());
        prop_assert_eq!(&reloaded, store.leaderboard());
    }

    #[test]
    fn score_is_monotonic_and_resets(
        seed in any::<u64>(),
        jumps in prop::collection::vec(any::<bool>(), 1..600),
    ) {
        let mut session = Session::new(GameConfig::default(), seed);
        let mut last_score = 0;

        for jump in jumps {
            if jump {
                session.jump();
            }
            session.advance(20.0);
            prop_assert!(session.score() >= last_score);
            last_score = session.score();
        }

        if session.phase() != GamePhase::Running {
            prop_assert!(session.restart());
            prop_assert_eq!(session.score(), 0);
            prop_assert_eq!(session.phase(), GamePhase::Idle);
        }
    }

    #[test]
    fn game_over_is_terminal(seed in any::<u64>(), frames in prop::collection::vec(1.0f64..60.0, 1..50)) {
        let mut session = Session::new(GameConfig::default(), seed);
        session.jump();

        // Never jump again: the bird falls to the ground eventually
        let mut game_overs = 0;
        for _ in 0..1000 {
            game_overs += session
                .advance(20.0)
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
            if session.phase() == GamePhase::GameOver {
                break;
            }
        }
        prop_assert_eq!(game_overs, 1);
        prop_assert_eq!(session.scheduler().active_count(), 0);

        let bird = session.state().bird;
        let pipes = session.state().pipes.clone();
        for elapsed in frames {
            prop_assert!(session.advance(elapsed).is_empty());
            session.jump();
        }
        prop_assert_eq!(session.state().bird, bird);
        prop_assert_eq!(&session.state().pipes, &pipes);
    }
}
