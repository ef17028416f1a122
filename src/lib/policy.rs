//! Scheduling policies and their parameters.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use {Error, Result, Time};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    FirstCome,
    ShortestJob,
    Priority,
    RoundRobin,
}

/// The way round-robin scheduling admits jobs to the ready queue.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Admission {
    All,
    Arrival,
}

/// The parameters of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    pub quantum: Option<Time>,
    pub preemptive: bool,
    pub admission: Admission,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match *self {
            Policy::FirstCome => "First Come First Served",
            Policy::ShortestJob => "Shortest Job First",
            Policy::Priority => "Priority Scheduling",
            Policy::RoundRobin => "Round Robin Scheduling",
        }
    }

    /// Check if the policy distinguishes preemptive and non-preemptive modes.
    #[inline]
    pub fn has_modes(&self) -> bool {
        match *self {
            Policy::ShortestJob | Policy::Priority => true,
            _ => false,
        }
    }

    /// Return the label describing the policy run with `params`.
    pub fn label(&self, params: &Params) -> String {
        match *self {
            Policy::RoundRobin => match params.quantum {
                Some(quantum) => format!("{} – time_quantum={}", self.name(), quantum),
                _ => self.name().to_string(),
            },
            _ if self.has_modes() => {
                let mode = if params.preemptive { "Preemptive" } else { "Non-Preemptive" };
                format!("{} – {}", self.name(), mode)
            },
            _ => self.name().to_string(),
        }
    }
}

impl fmt::Display for Policy {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Policy> {
        Ok(match &*name.trim().to_lowercase() {
            "fcfs" | "first-come" => Policy::FirstCome,
            "sjf" | "shortest-job" => Policy::ShortestJob,
            "priority" => Policy::Priority,
            "rr" | "round-robin" => Policy::RoundRobin,
            _ => return Err(Error::UnknownPolicy(name.to_string())),
        })
    }
}

impl Default for Admission {
    #[inline]
    fn default() -> Admission {
        Admission::All
    }
}

impl FromStr for Admission {
    type Err = Error;

    fn from_str(name: &str) -> Result<Admission> {
        Ok(match &*name.trim().to_lowercase() {
            "all" => Admission::All,
            "arrival" => Admission::Arrival,
            _ => raise!("the admission {:?} is unknown", name),
        })
    }
}

impl Default for Params {
    #[inline]
    fn default() -> Params {
        Params { quantum: None, preemptive: false, admission: Admission::All }
    }
}

impl Params {
    #[inline]
    pub fn with_quantum(quantum: Time) -> Params {
        Params { quantum: Some(quantum), ..Params::default() }
    }

    #[inline]
    pub fn preemptive() -> Params {
        Params { preemptive: true, ..Params::default() }
    }
}
