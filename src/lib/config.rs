//! Configuration.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use toml;

use policy::{Admission, Params, Policy};
use Result;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    pub schedule: Option<Schedule>,
    pub input: Option<Input>,
    pub output: Option<Output>,
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Schedule {
    pub policy: Option<String>,
    pub quantum: Option<i64>,
    pub preemptive: Option<bool>,
    pub admission: Option<Admission>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Input {
    pub path: Option<String>,
    pub query: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Output {
    pub path: Option<String>,
}

impl Config {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Config> {
        let path = path.as_ref();
        let mut contents = String::new();
        match File::open(path).and_then(|mut file| file.read_to_string(&mut contents)) {
            Ok(_) => {},
            Err(error) => raise!("failed to read the configuration file {:?} ({})", path, error),
        }
        let mut config = Config::parse(&contents)?;
        config.root = path.parent().map(|root| root.to_path_buf());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        match toml::from_str(contents) {
            Ok(config) => Ok(config),
            Err(error) => raise!("failed to parse the configuration file ({})", error),
        }
    }

    /// Override the scheduling settings with those present in `schedule`.
    pub fn update(&mut self, schedule: Schedule) {
        let current = self.schedule.get_or_insert_with(Schedule::default);
        if schedule.policy.is_some() {
            current.policy = schedule.policy;
        }
        if schedule.quantum.is_some() {
            current.quantum = schedule.quantum;
        }
        if schedule.preemptive.is_some() {
            current.preemptive = schedule.preemptive;
        }
        if schedule.admission.is_some() {
            current.admission = schedule.admission;
        }
    }

    pub fn policy(&self) -> Result<Option<Policy>> {
        match self.schedule.as_ref().and_then(|schedule| schedule.policy.as_ref()) {
            Some(name) => Ok(Some(name.parse()?)),
            _ => Ok(None),
        }
    }

    pub fn params(&self) -> Params {
        let mut params = Params::default();
        if let Some(ref schedule) = self.schedule {
            params.quantum = schedule.quantum;
            params.preemptive = schedule.preemptive.unwrap_or(false);
            params.admission = schedule.admission.unwrap_or_default();
        }
        params
    }

    pub fn input(&self) -> Option<PathBuf> {
        self.input.as_ref().and_then(|input| input.path.as_ref()).map(|path| self.resolve(path))
    }

    pub fn query(&self) -> Option<&str> {
        self.input.as_ref().and_then(|input| input.query.as_ref()).map(|query| &**query)
    }

    pub fn output(&self) -> Option<PathBuf> {
        self.output.as_ref().and_then(|output| output.path.as_ref()).map(|path| self.resolve(path))
    }

    pub fn resolve<T: AsRef<Path>>(&self, path: T) -> PathBuf {
        let path = path.as_ref();
        match self.root {
            Some(ref root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use policy::{Admission, Params, Policy};
    use super::{Config, Schedule};

    #[test]
    fn parse() {
        let mut config = Config::parse(r#"
            [schedule]
            policy = "round-robin"
            quantum = 4
            admission = "arrival"

            [input]
            path = "jobs.sqlite3"
            query = "SELECT burst, arrival FROM jobs"

            [output]
            path = "/tmp/results.txt"
        "#).unwrap();
        config.root = Some(PathBuf::from("data"));

        assert_eq!(config.policy().unwrap(), Some(Policy::RoundRobin));
        assert_eq!(config.params(), Params {
            quantum: Some(4),
            preemptive: false,
            admission: Admission::Arrival,
        });
        assert_eq!(config.input(), Some(Path::new("data").join("jobs.sqlite3")));
        assert_eq!(config.query(), Some("SELECT burst, arrival FROM jobs"));
        assert_eq!(config.output(), Some(PathBuf::from("/tmp/results.txt")));
    }

    #[test]
    fn parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.policy().unwrap(), None);
        assert_eq!(config.params(), Params::default());
        assert_eq!(config.input(), None);
    }

    #[test]
    fn update() {
        let mut config = Config::new("tests/fixtures/config.toml").unwrap();
        config.update(Schedule::default());
        assert_eq!(config.policy().unwrap(), Some(Policy::ShortestJob));
        assert_eq!(config.params(), Params::preemptive());

        config.update(Schedule {
            policy: Some("rr".to_string()),
            quantum: Some(3),
            preemptive: None,
            admission: Some(Admission::Arrival),
        });
        assert_eq!(config.policy().unwrap(), Some(Policy::RoundRobin));
        assert_eq!(config.params(), Params {
            quantum: Some(3),
            preemptive: true,
            admission: Admission::Arrival,
        });

        let mut config = Config::parse("[schedule]\nquantum = 4").unwrap();
        config.update(Schedule { quantum: Some(2), preemptive: Some(false), ..Schedule::default() });
        assert_eq!(config.params(), Params::with_quantum(2));

        let mut config = Config::default();
        config.update(Schedule { policy: Some("fcfs".to_string()), ..Schedule::default() });
        assert_eq!(config.policy().unwrap(), Some(Policy::FirstCome));
        assert_eq!(config.params(), Params::default());
    }

    #[test]
    fn parse_failures() {
        assert!(Config::parse("[schedule]\npolicy = \"lottery\"").unwrap().policy().is_err());
        assert!(Config::parse("[schedule]\nadmission = \"later\"").is_err());
        assert!(Config::parse("[schedule]\nquantum = \"four\"").is_err());
    }

    #[test]
    fn read() {
        let config = Config::new("tests/fixtures/config.toml").unwrap();
        assert_eq!(config.policy().unwrap(), Some(Policy::ShortestJob));
        assert!(config.params().preemptive);
        assert_eq!(config.input(), Some(Path::new("tests/fixtures").join("jobs.txt")));
        assert_eq!(config.output(), None);
    }
}
