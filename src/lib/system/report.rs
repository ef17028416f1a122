use std::fmt;

use job::Job;
use policy::{Params, Policy};
use schedule::Slice;
use system::History;
use {Result, Time};

/// The outcome of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The policy.
    pub policy: Policy,
    /// The parameters.
    pub params: Params,
    /// The waiting time of each job in input order.
    pub waiting: Vec<Time>,
    /// The completion time of each job in input order.
    pub completion: Vec<Time>,
    /// The mean waiting time.
    pub average: f64,
    /// The slices dispatched.
    pub timeline: Vec<Slice>,
    /// Statistics about the run.
    pub history: History,
}

impl Report {
    /// Collect the outcome of a run from the jobs it mutated.
    pub fn new(policy: Policy, params: Params, jobs: &[Job], timeline: Vec<Slice>)
               -> Result<Report> {

        let mut waiting = Vec::with_capacity(jobs.len());
        let mut completion = Vec::with_capacity(jobs.len());
        for job in jobs {
            waiting.push(some!(job.waiting, "{} has not completed", job));
            completion.push(some!(job.completion, "{} has not completed", job));
        }
        if waiting.is_empty() {
            raise!("a report requires at least one job");
        }
        let average = waiting.iter().map(|&time| time as f64).sum::<f64>() / waiting.len() as f64;

        let mut history = History::default();
        for slice in &timeline {
            history.count(slice);
        }

        Ok(Report {
            policy: policy,
            params: params,
            waiting: waiting,
            completion: completion,
            average: average,
            timeline: timeline,
            history: history,
        })
    }

    /// Return the label describing the policy and its parameters.
    #[inline]
    pub fn label(&self) -> String {
        self.policy.label(&self.params)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "Scheduling Method: {}", self.label())?;
        writeln!(formatter, "Process Waiting Times:")?;
        for (i, waiting) in self.waiting.iter().enumerate() {
            writeln!(formatter, "P{}: {} ms", i + 1, waiting)?;
        }
        write!(formatter, "Average Waiting Time: {:.2} ms", self.average)
    }
}
