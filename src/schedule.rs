use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Fire-and-forget delayed callbacks on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

/// Scheduler driven by hand through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves time forward and runs every task that came due, earliest first.
    pub fn advance(&self, by: Duration) {
        let now = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            clock.now
        };
        while let Some(task) = self.take_due(now) {
            task();
        }
    }

    fn take_due(&self, now: Duration) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let next = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(clock.pending.remove(next).task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        let seq = clock.seq;
        clock.seq += 1;
        clock.pending.push(Pending { due, seq, task });
    }
}
