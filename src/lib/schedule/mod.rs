//! Dispatch engines.

use job::Job;
use Time;

mod preemptive;
mod queue;
mod round_robin;
mod sequential;

pub use self::preemptive::run as preemptive;
pub use self::queue::{Pending, Queue};
pub use self::round_robin::run as round_robin;
pub use self::sequential::{order, run as sequential};

/// An interval during which the server runs one job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    pub job: usize,
    pub start: Time,
    pub finish: Time,
    pub done: bool,
}

/// A sequence of slices in the order of time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline(Vec<Slice>);

deref! { Timeline::0 => [Slice] }

/// A quantity jobs are ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Arrival,
    Burst,
    Remaining,
    Priority,
}

impl Key {
    #[inline]
    pub fn of(&self, job: &Job) -> i64 {
        match *self {
            Key::Arrival => job.arrival,
            Key::Burst => job.burst,
            Key::Remaining => job.remaining,
            Key::Priority => job.priority,
        }
    }
}

impl Timeline {
    #[inline]
    pub fn new() -> Timeline {
        Timeline(vec![])
    }

    /// Record that `job` ran from `start` to `finish`.
    ///
    /// A slice that continues the previous one of the same job is merged into
    /// it.
    pub fn record(&mut self, job: &Job, start: Time, finish: Time) {
        debug!(target: "Schedule", "{:>6} .. {:>6} | job #{}{}",
               start, finish, job.id, if job.done() { " done" } else { "" });
        if let Some(last) = self.0.last_mut() {
            if last.job == job.id && last.finish == start {
                last.finish = finish;
                last.done = job.done();
                return;
            }
        }
        self.0.push(Slice { job: job.id, start: start, finish: finish, done: job.done() });
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Slice> {
        self.0
    }
}
