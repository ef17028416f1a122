use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use job::Job;
use source::Source;
use Result;

/// A text file with one job per line.
///
/// Each line holds the burst time, the arrival time, and optionally the
/// priority, separated by whitespace. Blank lines and lines starting with `#`
/// are skipped.
pub struct Text {
    path: PathBuf,
}

impl Text {
    #[inline]
    pub fn new<T: AsRef<Path>>(path: T) -> Text {
        Text { path: path.as_ref().to_path_buf() }
    }
}

impl Source for Text {
    fn read(&mut self) -> Result<Vec<Job>> {
        info!(target: "Source", "Reading {:?}...", &self.path);
        let mut contents = String::new();
        match File::open(&self.path).and_then(|mut file| file.read_to_string(&mut contents)) {
            Ok(_) => {},
            Err(error) => raise!("failed to read {:?} ({})", &self.path, error),
        }
        let jobs = parse(&contents)?;
        info!(target: "Source", "Read {} jobs.", jobs.len());
        Ok(jobs)
    }
}

/// Parse jobs from text.
pub fn parse(contents: &str) -> Result<Vec<Job>> {
    let mut jobs = vec![];
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut values = Vec::with_capacity(3);
        for field in line.split_whitespace() {
            match field.parse::<i64>() {
                Ok(value) => values.push(value),
                _ => raise!("line {}: failed to parse {:?} as an integer", i + 1, field),
            }
        }
        let (burst, arrival, priority) = match &values[..] {
            &[burst, arrival] => (burst, arrival, 0),
            &[burst, arrival, priority] => (burst, arrival, priority),
            _ => raise!("line {}: expected 2 or 3 values but found {}", i + 1, values.len()),
        };
        jobs.push(Job::new(jobs.len() + 1, burst, arrival, priority));
    }
    Ok(jobs)
}
