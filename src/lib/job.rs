use std::fmt;

use result::Input;
use {Error, Result, Time};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub id: usize,
    pub arrival: Time,
    pub burst: Time,
    pub priority: i64,
    pub remaining: Time,
    pub waiting: Option<Time>,
    pub completion: Option<Time>,
}

impl Job {
    #[inline]
    pub fn new(id: usize, burst: Time, arrival: Time, priority: i64) -> Job {
        Job {
            id: id,
            arrival: arrival,
            burst: burst,
            priority: priority,
            remaining: burst,
            waiting: None,
            completion: None,
        }
    }

    /// Forget the outcome of a previous run.
    #[inline]
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.waiting = None;
        self.completion = None;
    }

    /// Account for `time` units of processing.
    #[inline]
    pub fn process(&mut self, time: Time) {
        debug_assert!(time > 0 && time <= self.remaining);
        self.remaining -= time;
    }

    /// Mark the job as done at `time`.
    #[inline]
    pub fn finish(&mut self, time: Time) {
        debug_assert!(time >= self.arrival + self.burst);
        self.remaining = 0;
        self.completion = Some(time);
        self.waiting = Some(time - self.arrival - self.burst);
    }

    #[inline]
    pub fn done(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "job #{} (burst {}, arrival {}, priority {})",
               self.id, self.burst, self.arrival, self.priority)
    }
}

/// Check that a set of jobs can be simulated.
pub fn validate(jobs: &[Job]) -> Result<()> {
    if jobs.is_empty() {
        return Err(Error::InvalidInput(Input::Empty));
    }
    for job in jobs {
        if job.burst <= 0 {
            return Err(Error::InvalidInput(Input::Burst { id: job.id, value: job.burst }));
        }
        if job.arrival < 0 {
            return Err(Error::InvalidInput(Input::Arrival { id: job.id, value: job.arrival }));
        }
    }
    // No clock can pass the last arrival plus the total work.
    let mut horizon = jobs.iter().map(|job| job.arrival).max().unwrap_or(0);
    for job in jobs {
        horizon = match horizon.checked_add(job.burst) {
            Some(horizon) => horizon,
            _ => return Err(Error::InvalidInput(Input::Overflow)),
        };
    }
    Ok(())
}

/// Create jobs from `(burst, arrival, priority)` triples in input order.
pub fn from_triples(triples: &[(Time, Time, i64)]) -> Vec<Job> {
    triples.iter().enumerate().map(|(i, &(burst, arrival, priority))| {
        Job::new(i + 1, burst, arrival, priority)
    }).collect()
}
