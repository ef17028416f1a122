//! Complete system.

use job::{self, Job};
use policy::{Params, Policy};
use schedule::{self, Key};
use {Error, Result, Time};

mod history;
mod report;

pub use self::history::History;
pub use self::report::Report;

/// A scheduling system.
///
/// A system holds no state between runs; running it twice on the same jobs
/// yields the same report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct System {
    policy: Policy,
    params: Params,
}

impl System {
    /// Create a system.
    pub fn new(policy: Policy, params: Params) -> Result<System> {
        if let Policy::RoundRobin = policy {
            match params.quantum {
                Some(quantum) if quantum > 0 => {},
                value => return Err(Error::InvalidParameter { name: "quantum", value: value }),
            }
        }
        Ok(System { policy: policy, params: params })
    }

    /// Simulate the jobs and return the outcome.
    ///
    /// The jobs are validated first and left untouched if they are rejected.
    /// Otherwise, their waiting, completion, and remaining times are reset and
    /// then filled in by the simulation.
    pub fn run(&self, jobs: &mut [Job]) -> Result<Report> {
        job::validate(jobs)?;

        let label = self.policy.label(&self.params);
        info!(target: "System", "Running {} on {} jobs...", label, jobs.len());

        for job in jobs.iter_mut() {
            job.reset();
        }

        let timeline = match (self.policy, self.params.preemptive) {
            (Policy::FirstCome, _) => schedule::sequential(jobs, Key::Arrival),
            (Policy::ShortestJob, false) => schedule::sequential(jobs, Key::Burst),
            (Policy::ShortestJob, true) => schedule::preemptive(jobs, Key::Remaining),
            (Policy::Priority, false) => schedule::sequential(jobs, Key::Priority),
            (Policy::Priority, true) => schedule::preemptive(jobs, Key::Priority),
            (Policy::RoundRobin, _) => {
                let quantum = some!(self.params.quantum, "the quantum is missing");
                schedule::round_robin(jobs, quantum, self.params.admission)
            },
        };

        let report = Report::new(self.policy, self.params, jobs, timeline.into_inner())?;
        info!(target: "System", "Done with {} slices and {} preemptions in {} units of time.",
              report.history.dispatched, report.history.preempted, report.history.makespan);
        info!(target: "System", "The average waiting time is {:.2}.", report.average);

        Ok(report)
    }
}

/// Simulate the jobs under the policy with the given name.
///
/// The quantum is required for round-robin scheduling and ignored otherwise.
pub fn run_policy(jobs: &mut [Job], name: &str, quantum: Option<Time>) -> Result<Report> {
    let policy = name.parse::<Policy>()?;
    let params = Params { quantum: quantum, ..Params::default() };
    System::new(policy, params)?.run(jobs)
}

#[cfg(test)]
mod tests {
    use job::{self, Job};
    use policy::{Admission, Params, Policy};
    use result::Input;
    use Error;
    use super::{System, run_policy};

    fn sample() -> Vec<Job> {
        job::from_triples(&[(5, 0, 3), (3, 1, 1), (8, 2, 2)])
    }

    #[test]
    fn first_come() {
        let mut jobs = sample();
        let report = run_policy(&mut jobs, "fcfs", None).unwrap();
        assert_eq!(report.waiting, vec![0, 4, 6]);
        assert_eq!(report.average, 10.0 / 3.0);
        assert_eq!(jobs.iter().map(|job| job.waiting).collect::<Vec<_>>(),
                   vec![Some(0), Some(4), Some(6)]);
    }

    #[test]
    fn shortest_job() {
        let mut jobs = sample();
        let report = run_policy(&mut jobs, "sjf", None).unwrap();
        assert_eq!(report.waiting, vec![4, 0, 7]);
        assert_eq!(report.average, 11.0 / 3.0);
    }

    #[test]
    fn priority() {
        let mut jobs = sample();
        let report = run_policy(&mut jobs, "priority", None).unwrap();
        assert_eq!(report.waiting, vec![12, 0, 2]);
        assert!(report.waiting.iter().all(|&waiting| waiting >= 0));
    }

    #[test]
    fn round_robin() {
        let mut jobs = job::from_triples(&[(4, 0, 0), (2, 0, 0)]);
        let report = run_policy(&mut jobs, "round-robin", Some(2)).unwrap();
        assert_eq!(report.waiting, vec![2, 2]);
        assert_eq!(report.average, 2.0);
        assert_eq!(report.completion, vec![6, 4]);
        assert_eq!(report.history.preempted, 1);
    }

    #[test]
    fn preemptive() {
        let mut jobs = job::from_triples(&[(8, 0, 0), (4, 1, 0), (9, 2, 0), (5, 3, 0)]);
        let report = System::new(Policy::ShortestJob, Params::preemptive()).unwrap()
                                                                           .run(&mut jobs)
                                                                           .unwrap();
        assert_eq!(report.waiting, vec![9, 0, 15, 2]);
        assert_eq!(report.average, 6.5);
        assert_eq!(report.label(), "Shortest Job First – Preemptive");

        let report = System::new(Policy::FirstCome, Params::preemptive()).unwrap()
                                                                         .run(&mut jobs)
                                                                         .unwrap();
        assert_eq!(report.waiting, vec![0, 7, 10, 18]);
    }

    #[test]
    fn repeated_runs() {
        let mut jobs = sample();
        let system = System::new(Policy::RoundRobin, Params::with_quantum(3)).unwrap();
        let one = system.run(&mut jobs).unwrap();
        let other = system.run(&mut jobs).unwrap();
        assert_eq!(one, other);

        let one = run_policy(&mut jobs, "sjf", None).unwrap();
        run_policy(&mut jobs, "priority", None).unwrap();
        let other = run_policy(&mut jobs, "sjf", None).unwrap();
        assert_eq!(one, other);
    }

    #[test]
    fn first_come_ignores_burst_and_priority() {
        let mut one = job::from_triples(&[(5, 0, 3), (3, 1, 1), (8, 2, 2)]);
        let mut other = job::from_triples(&[(5, 0, 1), (3, 1, 2), (8, 2, 3)]);
        let one = run_policy(&mut one, "fcfs", None).unwrap();
        let other = run_policy(&mut other, "fcfs", None).unwrap();
        assert_eq!(one.waiting, other.waiting);

        let mut other = job::from_triples(&[(8, 0, 3), (5, 1, 1), (3, 2, 2)]);
        let other = run_policy(&mut other, "fcfs", None).unwrap();
        let order = |report: &::Report| report.timeline.iter().map(|slice| slice.job)
                                                             .collect::<Vec<_>>();
        assert_eq!(order(&one), order(&other));
        assert_eq!(order(&one), vec![1, 2, 3]);
    }

    #[test]
    fn round_robin_with_large_quantum() {
        let mut one = job::from_triples(&[(5, 0, 0), (3, 1, 0), (8, 2, 0), (4, 30, 0)]);
        let mut other = one.clone();
        let one = run_policy(&mut one, "rr", Some(8)).unwrap();
        let other = run_policy(&mut other, "fcfs", None).unwrap();
        assert_eq!(one.waiting, other.waiting);
        assert_eq!(one.average, other.average);
    }

    #[test]
    fn round_robin_completions() {
        let mut jobs = job::from_triples(&[(7, 0, 0), (2, 0, 0), (9, 3, 0), (4, 6, 0)]);
        for &admission in &[Admission::All, Admission::Arrival] {
            let params = Params { quantum: Some(3), preemptive: false, admission: admission };
            let report = System::new(Policy::RoundRobin, params).unwrap().run(&mut jobs).unwrap();
            for (job, &completion) in jobs.iter().zip(&report.completion) {
                assert_eq!(completion, report.waiting[job.id - 1] + job.burst + job.arrival);
                assert!(completion >= job.arrival + job.burst);
            }
        }
    }

    #[test]
    fn invalid_input() {
        let mut jobs = Vec::<Job>::new();
        assert_eq!(run_policy(&mut jobs, "fcfs", None),
                   Err(Error::InvalidInput(Input::Empty)));

        let mut jobs = job::from_triples(&[(5, 0, 0), (-1, 0, 0)]);
        run_policy(&mut jobs[..1], "fcfs", None).unwrap();
        let before = jobs.clone();
        assert_eq!(run_policy(&mut jobs, "sjf", None),
                   Err(Error::InvalidInput(Input::Burst { id: 2, value: -1 })));
        assert_eq!(jobs, before);

        let mut jobs = job::from_triples(&[(5, -2, 0)]);
        assert_eq!(run_policy(&mut jobs, "rr", Some(1)),
                   Err(Error::InvalidInput(Input::Arrival { id: 1, value: -2 })));
    }

    #[test]
    fn large_bursts() {
        use std::i64::MAX;

        for &(name, quantum) in &[("fcfs", None), ("sjf", None), ("priority", None), ("rr", Some(MAX))] {
            let mut jobs = job::from_triples(&[(MAX / 2 + 1, 0, 0), (MAX / 2 + 1, 0, 0), (1, 0, 0)]);
            let before = jobs.clone();
            assert_eq!(run_policy(&mut jobs, name, quantum),
                       Err(Error::InvalidInput(Input::Overflow)));
            assert_eq!(jobs, before);
        }

        let mut jobs = job::from_triples(&[(MAX - 10, 0, 0), (5, 3, 0)]);
        let report = run_policy(&mut jobs, "fcfs", None).unwrap();
        assert_eq!(report.waiting, vec![0, MAX - 13]);
        assert_eq!(report.completion, vec![MAX - 10, MAX - 5]);
        assert!(report.average > 0.0);

        let report = System::new(Policy::ShortestJob, Params::preemptive()).unwrap()
                                                                           .run(&mut jobs)
                                                                           .unwrap();
        assert_eq!(report.waiting, vec![5, 0]);
        assert_eq!(report.completion, vec![MAX - 5, 8]);
    }

    #[test]
    fn invalid_parameter() {
        let mut jobs = sample();
        run_policy(&mut jobs, "fcfs", None).unwrap();
        let before = jobs.clone();

        assert_eq!(run_policy(&mut jobs, "rr", Some(0)),
                   Err(Error::InvalidParameter { name: "quantum", value: Some(0) }));
        assert_eq!(run_policy(&mut jobs, "rr", Some(-4)),
                   Err(Error::InvalidParameter { name: "quantum", value: Some(-4) }));
        assert_eq!(run_policy(&mut jobs, "rr", None),
                   Err(Error::InvalidParameter { name: "quantum", value: None }));
        assert_eq!(jobs, before);

        assert!(System::new(Policy::FirstCome, Params::with_quantum(0)).is_ok());
    }

    #[test]
    fn unknown_policy() {
        let mut jobs = sample();
        let before = jobs.clone();
        assert_eq!(run_policy(&mut jobs, "lottery", Some(2)),
                   Err(Error::UnknownPolicy("lottery".to_string())));
        assert_eq!(jobs, before);
    }
}
