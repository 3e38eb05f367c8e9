//! Explicit scheduling for delayed moves
//!
//! The opponent's "thinking" pause is a display delay, not a computation
//! bound. Modeling it as a task queue instead of a bare deferred callback
//! makes cancellation on reset explicit: [`Scheduler::clear`] drops pending
//! tasks, and every task carries the session generation it was scheduled
//! under so stale tasks can be rejected even after being drained.

use std::time::{Duration, Instant};

/// Work a session defers until a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    OpponentMove,
}

/// A task together with its due time and originating session generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub task: Task,
    pub generation: u64,
    pub due: Instant,
}

/// FIFO queue of delayed tasks.
///
/// Single-threaded by design: the driver polls [`Scheduler::due`] from its
/// event loop. No two moves can ever be in flight at once because the
/// session only schedules from `AwaitingHuman` transitions.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task to fire after `delay`.
    pub fn schedule(&mut self, task: Task, generation: u64, delay: Duration) {
        self.queue.push(ScheduledTask {
            task,
            generation,
            due: Instant::now() + delay,
        });
    }

    /// Remove and return every task due at `now`, preserving order.
    pub fn due(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let mut ripe = Vec::new();
        self.queue.retain(|task| {
            if task.due <= now {
                ripe.push(*task);
                false
            } else {
                true
            }
        });
        ripe
    }

    /// Cancel every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Earliest pending due time, for drivers that want to sleep precisely.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|task| task.due).min()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_task_not_due_before_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Task::OpponentMove, 1, FAR);

        assert!(scheduler.due(Instant::now()).is_empty());
        assert!(!scheduler.is_idle());
    }

    #[test]
    fn test_task_fires_once_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Task::OpponentMove, 1, Duration::ZERO);

        let fired = scheduler.due(Instant::now());
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].task, Task::OpponentMove);
        assert_eq!(fired[0].generation, 1);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_fired_tasks_do_not_repeat() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Task::OpponentMove, 1, Duration::ZERO);

        let now = Instant::now();
        assert_eq!(scheduler.due(now).len(), 1);
        assert!(scheduler.due(now).is_empty());
    }

    #[test]
    fn test_clear_cancels_pending_tasks() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Task::OpponentMove, 1, Duration::ZERO);
        scheduler.clear();

        assert!(scheduler.due(Instant::now()).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_next_due_reports_earliest() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.next_due().is_none());

        scheduler.schedule(Task::OpponentMove, 1, FAR);
        scheduler.schedule(Task::OpponentMove, 1, Duration::from_millis(1));

        let next = scheduler.next_due().unwrap();
        assert!(next <= Instant::now() + Duration::from_millis(1));
    }
}
