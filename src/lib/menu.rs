//! Interactive session.

use std::io::{BufRead, Write};

use job::Job;
use output::Output;
use policy::{Params, Policy};
use system::{Report, System};
use Result;

macro_rules! say(
    ($menu:expr, $($arg:tt)*) => (ok!(writeln!($menu.writer, $($arg)*)));
);

macro_rules! ask(
    ($menu:expr, $($arg:tt)*) => (ok!(write!($menu.writer, $($arg)*)));
);

/// A menu for choosing and running policies.
pub struct Menu<R, W> {
    reader: R,
    writer: W,
    policy: Option<Policy>,
    params: Params,
    report: Option<Report>,
}

/// Serve a menu until the session ends, then write the last report if any.
pub fn run<R, W>(reader: R, writer: W, jobs: &mut [Job], params: Params,
                 output: &mut dyn Output) -> Result<()>
    where R: BufRead, W: Write
{
    let mut menu = Menu::new(reader, writer, params);
    menu.serve(jobs)?;
    if let Some(report) = menu.report() {
        output.write(report)?;
    }
    Ok(())
}

impl<R: BufRead, W: Write> Menu<R, W> {
    #[inline]
    pub fn new(reader: R, writer: W, params: Params) -> Menu<R, W> {
        Menu { reader: reader, writer: writer, policy: None, params: params, report: None }
    }

    /// Read choices until the end of the session.
    ///
    /// The session ends with option 4 or at the end of input.
    pub fn serve(&mut self, jobs: &mut [Job]) -> Result<()> {
        loop {
            let method = match self.policy {
                Some(policy) => policy.name(),
                _ => "None",
            };
            say!(self, "\nCPU Scheduler Simulator");
            say!(self, "1) Scheduling Method ({})", method);
            say!(self, "2) Preemptive Mode ({})", mode(&self.params));
            say!(self, "3) Show Result");
            say!(self, "4) End Program");
            ask!(self, "Option > ");
            let line = match self.read()? {
                Some(line) => line,
                _ => return Ok(()),
            };
            match &*line {
                "1" => self.choose()?,
                "2" => {
                    self.params.preemptive = !self.params.preemptive;
                    say!(self, "Preemptive Mode: {}", mode(&self.params));
                },
                "3" => self.show(jobs)?,
                "4" => return Ok(()),
                _ => say!(self, "Invalid choice. Please choose again."),
            }
        }
    }

    #[inline]
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    fn choose(&mut self) -> Result<()> {
        say!(self, "1) None");
        say!(self, "2) {}", Policy::FirstCome.name());
        say!(self, "3) {}", Policy::ShortestJob.name());
        say!(self, "4) {}", Policy::Priority.name());
        say!(self, "5) {}", Policy::RoundRobin.name());
        ask!(self, "Choose scheduling method (1-5): ");
        let line = match self.read()? {
            Some(line) => line,
            _ => return Ok(()),
        };
        match &*line {
            "1" => self.policy = None,
            "2" => self.policy = Some(Policy::FirstCome),
            "3" => self.policy = Some(Policy::ShortestJob),
            "4" => self.policy = Some(Policy::Priority),
            "5" => {
                ask!(self, "Enter time quantum for Round-Robin Scheduling: ");
                let quantum = match self.read()? {
                    Some(line) => line.parse::<i64>().ok(),
                    _ => return Ok(()),
                };
                let params = Params { quantum: quantum, ..self.params };
                match System::new(Policy::RoundRobin, params) {
                    Ok(_) => {
                        self.params = params;
                        self.policy = Some(Policy::RoundRobin);
                    },
                    Err(error) => say!(self, "Invalid time quantum: {}.", error),
                }
            },
            _ => say!(self, "Invalid scheduling method choice."),
        }
        Ok(())
    }

    fn show(&mut self, jobs: &mut [Job]) -> Result<()> {
        let policy = match self.policy {
            Some(policy) => policy,
            _ => {
                say!(self, "No scheduling method chosen.");
                return Ok(());
            },
        };
        match System::new(policy, self.params).and_then(|system| system.run(jobs)) {
            Ok(report) => {
                say!(self, "\n{}", report);
                self.report = Some(report);
            },
            Err(error) => warn!(target: "Menu", "Failed to run the simulation: {}.", error),
        }
        Ok(())
    }

    fn read(&mut self) -> Result<Option<String>> {
        ok!(self.writer.flush());
        let mut line = String::new();
        match ok!(self.reader.read_line(&mut line)) {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_string())),
        }
    }
}

fn mode(params: &Params) -> &'static str {
    if params.preemptive { "On" } else { "Off" }
}
