use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use output::Output;
use system::Report;
use Result;

/// A text file.
pub struct Text {
    path: PathBuf,
}

impl Text {
    #[inline]
    pub fn new<T: AsRef<Path>>(path: T) -> Text {
        Text { path: path.as_ref().to_path_buf() }
    }
}

impl Output for Text {
    fn write(&mut self, report: &Report) -> Result<()> {
        info!(target: "Output", "Writing {:?}...", &self.path);
        let mut file = ok!(File::create(&self.path));
        ok!(file.write_all(format(report).as_bytes()));
        Ok(())
    }
}

/// Format a report: the waiting times alone, one per line, followed by
/// statistics.
pub fn format(report: &Report) -> String {
    let mut buffer = String::new();
    for waiting in &report.waiting {
        let _ = writeln!(buffer, "{}", waiting);
    }
    let _ = writeln!(buffer, "\n===== Additional Statistics =====");
    let _ = writeln!(buffer, "Scheduling Method: {}", report.label());
    let _ = writeln!(buffer, "Average Waiting Time for All Jobs: {:.2} ms", report.average);
    let _ = writeln!(buffer, "Waiting Time for Each Job:");
    for (i, waiting) in report.waiting.iter().enumerate() {
        let _ = writeln!(buffer, "Job {}: {} ms", i + 1, waiting);
    }
    buffer
}
