//! Tool for simulating single-server CPU scheduling.

#[macro_use]
extern crate log;

extern crate serde;
extern crate sqlite;
extern crate toml;

#[macro_use]
mod macros;

mod result;

pub mod config;
pub mod job;
pub mod menu;
pub mod output;
pub mod policy;
pub mod schedule;
pub mod source;
pub mod system;

pub use config::Config;
pub use job::Job;
pub use policy::{Admission, Params, Policy};
pub use result::{Error, Input, Result};
pub use system::{run_policy, History, Report, System};

/// A simulated point in time.
pub type Time = i64;
