//! Game session: state machine, timers and input
//!
//! `Idle --jump--> Running --crash--> GameOver --restart--> Idle`
//!
//! While Running, three periodic tasks drive the simulation. After every
//! step the collision check runs on the resulting state; a crash cancels all
//! timers so nothing else mutates the state until restart.

use super::collision;
use super::scheduler::{Scheduler, Task};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick;
use crate::config::GameConfig;
use crate::consts::{MAX_FRAME_MS, TICK_MS};

/// A single game: state plus the timers that advance it
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scheduler: Scheduler,
    /// Sub-millisecond time carried between frames
    carry_ms: f64,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            scheduler: Scheduler::new(),
            carry_ms: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Jump input. Starts the run from Idle; ignored after game over.
    /// Returns the events it caused.
    pub fn jump(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.state.phase {
            GamePhase::Idle => {
                self.start_run();
                events.push(GameEvent::Started);
                tick::apply_jump(&mut self.state);
            }
            GamePhase::Running => tick::apply_jump(&mut self.state),
            GamePhase::GameOver => {}
        }
        events
    }

    /// Reset to Idle. Ignored while Running; repeated calls are harmless.
    /// Returns whether the state was reset.
    pub fn restart(&mut self) -> bool {
        if self.state.phase == GamePhase::Running {
            log::debug!("Restart ignored while running");
            return false;
        }
        self.scheduler.cancel_all();
        self.state.reset();
        self.carry_ms = 0.0;
        true
    }

    /// Advance wall-clock time by `elapsed_ms`, firing every task that falls
    /// due. Long frames are clamped so a backgrounded tab doesn't replay
    /// seconds of ticks at once.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != GamePhase::Running {
            return events;
        }

        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        };
        let total = self.carry_ms + elapsed;
        let whole_ms = total.floor();
        self.carry_ms = total - whole_ms;

        let until = self.scheduler.now_ms() + whole_ms as u64;
        while let Some(task) = self.scheduler.next_due(until) {
            self.run_task(task, &mut events);
        }
        self.scheduler.advance_to(until);

        events
    }

    fn start_run(&mut self) {
        self.state.phase = GamePhase::Running;
        self.carry_ms = 0.0;
        self.scheduler.start(Task::Physics, TICK_MS);
        self.scheduler
            .start(Task::Spawn, self.state.config.pipe.interval);
        self.scheduler.start(Task::Scroll, TICK_MS);
        log::info!("Run started");
    }

    fn run_task(&mut self, task: Task, events: &mut Vec<GameEvent>) {
        // Cancelled timers never fire, but a stale task must not mutate
        // a finished game either.
        if self.state.phase != GamePhase::Running {
            return;
        }

        match task {
            Task::Physics => tick::physics_step(&mut self.state),
            Task::Spawn => {
                let top_height = tick::spawn_pipe(&mut self.state);
                events.push(GameEvent::PipeSpawned { top_height });
            }
            Task::Scroll => {
                if let Some(score) = tick::scroll_step(&mut self.state) {
                    log::debug!("Score: {}", score);
                    events.push(GameEvent::Scored { score });
                }
            }
        }

        self.check_collisions(events);
    }

    /// Post-step hook: end the run on any crash
    fn check_collisions(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        if let Some(cause) = collision::detect(&self.state) {
            self.state.phase = GamePhase::GameOver;
            self.scheduler.cancel_all();
            log::info!(
                "Game over: hit {} with score {} after {} ticks",
                cause.as_str(),
                self.state.score,
                self.state.time_ticks
            );
            events.push(GameEvent::GameOver {
                score: self.state.score,
                cause,
            });
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
