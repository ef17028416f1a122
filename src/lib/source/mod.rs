//! Job sources.

use std::path::Path;

use job::Job;
use Result;

mod sqlite;
mod text;

pub use self::sqlite::{QUERY, SQLite};
pub use self::text::Text;

/// A source of jobs.
pub trait Source {
    /// Read all jobs in input order.
    fn read(&mut self) -> Result<Vec<Job>>;
}

/// Open a source, choosing the kind by the extension of the file.
///
/// Files ending with `.sqlite`, `.sqlite3`, or `.db` are read as databases
/// using `query` (or `QUERY` by default); other files are read as text.
pub fn new<T: AsRef<Path>>(path: T, query: Option<&str>) -> Result<Box<dyn Source>> {
    let path = path.as_ref();
    if ::std::fs::metadata(path).is_err() {
        raise!("the job file {:?} does not exist", path);
    }
    let source: Box<dyn Source> = if is_database(path) {
        Box::new(SQLite::new(path, query)?)
    } else {
        Box::new(Text::new(path))
    };
    Ok(source)
}

/// Read all jobs from a file.
#[inline]
pub fn read<T: AsRef<Path>>(path: T, query: Option<&str>) -> Result<Vec<Job>> {
    new(path, query)?.read()
}

/// Check if a file is a database judging by its extension.
pub fn is_database(path: &Path) -> bool {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("sqlite") | Some("sqlite3") | Some("db") => true,
        _ => false,
    }
}
