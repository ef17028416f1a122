#[macro_use]
extern crate log;

extern crate arguments;
extern crate scheduler;
extern crate term;

use log::Level;
use std::path::PathBuf;

use scheduler::config::Schedule;
use scheduler::{menu, output, source, Config, System};

pub use scheduler::{Error, Result};

const USAGE: &'static str = "
Usage: scheduler [options]

Options:
    --config <path>          Configuration file.
    --input <path>           Job file, text or SQLite.
    --output <path>          Output file for the results, text or SQLite.
    --policy <name>          fcfs, sjf, priority, or round-robin.
    --quantum <time>         Time quantum for round-robin scheduling.
    --preemptive             Preempt shortest-job-first and priority scheduling.
    --admission <mode>       Round-robin admission, all or arrival [default: all].
    --interactive            Choose the policy from a menu.

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($message:expr) => (return Err(::scheduler::Error::new($message)));
    ($($arg:tt)*) => (return Err(::scheduler::Error::new(format!($($arg)*))));
);

macro_rules! ok(
    ($result:expr) => (match $result {
        Ok(result) => result,
        Err(error) => raise!(error),
    });
);

macro_rules! some(
    ($option:expr, $($arg:tt)*) => (match $option {
        Some(value) => value,
        _ => raise!($($arg)*),
    });
);

mod logger;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = ok!(arguments::parse(std::env::args()));

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Debug);
    } else {
        logger::setup(Level::Warn);
    }

    let mut config = match arguments.get::<String>("config") {
        Some(path) => Config::new(path)?,
        _ => Config::default(),
    };
    config.update(Schedule {
        policy: arguments.get::<String>("policy"),
        quantum: arguments.get::<i64>("quantum"),
        preemptive: if arguments.get::<bool>("preemptive").unwrap_or(false) { Some(true) } else { None },
        admission: match arguments.get::<String>("admission") {
            Some(admission) => Some(admission.parse()?),
            _ => None,
        },
    });
    let params = config.params();

    let input = match arguments.get::<String>("input") {
        Some(path) => PathBuf::from(path),
        _ => some!(config.input(), "a job file is required"),
    };
    let mut jobs = source::read(&input, config.query())?;

    let mut output = {
        let path = arguments.get::<String>("output").map(PathBuf::from).or_else(|| config.output());
        output::new(path)?
    };

    if arguments.get::<bool>("interactive").unwrap_or(false) {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return menu::run(stdin.lock(), stdout.lock(), &mut jobs, params, &mut *output);
    }

    let policy = some!(config.policy()?, "a policy is required");

    let report = System::new(policy, params)?.run(&mut jobs)?;
    println!("{}", report);
    info!(target: "Scheduler", "Idle for {} units of time; the last job finished at {}.",
          report.history.idle, report.history.makespan);

    output.write(&report)
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

fn fail(error: Error) -> ! {
    use std::io::{stderr, Write};
    match term::stderr() {
        Some(mut output) => {
            let _ = output.fg(term::color::RED);
            let _ = write!(output, "Error: {}.\n", error);
            let _ = output.reset();
        },
        _ => {
            let _ = write!(stderr(), "Error: {}.\n", error);
        },
    }
    std::process::exit(1);
}
