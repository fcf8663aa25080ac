use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

pub type Task = Box<dyn FnOnce()>;

/// Deferred execution on the UI thread.
pub trait Scheduler {
    fn defer(&self, task: Task);
}

/// Run-loop style queue: each tick runs what was queued before the tick began.
///
/// Tasks deferred while a tick runs wait for the next tick, so a task that
/// keeps rescheduling itself runs once per tick instead of spinning.
#[derive(Default)]
pub struct DeferredQueue {
    pending: RefCell<VecDeque<Task>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Runs one tick and returns how many tasks ran.
    pub fn run_tick(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let ran = batch.len();
        for task in batch {
            task();
        }
        ran
    }

    /// Runs ticks until the queue drains or `max_ticks` is reached; returns ticks run.
    pub fn run_until_idle(&self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_empty() {
            self.run_tick();
            ticks += 1;
        }
        ticks
    }
}

impl Scheduler for DeferredQueue {
    fn defer(&self, task: Task) {
        self.pending.borrow_mut().push_back(task);
    }
}

impl fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.len())
            .finish()
    }
}
