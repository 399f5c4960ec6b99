//! Single-threaded periodic task scheduler
//!
//! Replaces free-running interval timers with explicit, cancellable tasks on
//! a simulated millisecond clock. The caller advances the clock and pulls
//! due tasks one at a time, so it can cancel everything mid-frame (game
//! over) and nothing further fires.

/// Periodic jobs driven by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Bird gravity/position
    Physics,
    /// New pipe at the right edge
    Spawn,
    /// Pipe movement and scoring
    Scroll,
}

#[derive(Debug, Clone)]
struct Scheduled {
    task: Task,
    interval_ms: u64,
    next_due_ms: u64,
}

/// Cancellable periodic tasks on a monotonically increasing clock
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    /// In registration order, which breaks ties between same-instant tasks
    tasks: Vec<Scheduled>,
    now_ms: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` every `interval_ms`, first firing one interval from
    /// now. Restarting an already scheduled task resets its phase.
    pub fn start(&mut self, task: Task, interval_ms: u32) {
        let interval_ms = u64::from(interval_ms.max(1));
        let next_due_ms = self.now_ms + interval_ms;

        if let Some(existing) = self.tasks.iter_mut().find(|s| s.task == task) {
            existing.interval_ms = interval_ms;
            existing.next_due_ms = next_due_ms;
        } else {
            self.tasks.push(Scheduled {
                task,
                interval_ms,
                next_due_ms,
            });
        }
    }

    /// Stop a task. Returns whether it was scheduled.
    pub fn cancel(&mut self, task: Task) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|s| s.task != task);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, task: Task) -> bool {
        self.tasks.iter().any(|s| s.task == task)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time and rescheduling it. Returns None once nothing else is
    /// due; call [`Scheduler::advance_to`] afterwards to finish the frame.
    pub fn next_due(&mut self, until_ms: u64) -> Option<Task> {
        let (index, due) = self
            .tasks
            .iter()
            .enumerate()
            .min_by_key(|(i, s)| (s.next_due_ms, *i))
            .map(|(i, s)| (i, s.next_due_ms))?;

        if due > until_ms {
            return None;
        }

        let scheduled = &mut self.tasks[index];
        self.now_ms = due.max(self.now_ms);
        scheduled.next_due_ms += scheduled.interval_ms;
        Some(scheduled.task)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
