use sqlite::{Connection, State};
use std::path::Path;

use job::Job;
use source::Source;
use Result;

/// The default query for reading jobs.
pub const QUERY: &'static str = "SELECT `burst`, `arrival`, `priority` FROM `jobs` ORDER BY `rowid`";

/// An SQLite database.
pub struct SQLite {
    connection: Connection,
    query: String,
}

impl SQLite {
    /// Open a database.
    pub fn new<T: AsRef<Path>>(path: T, query: Option<&str>) -> Result<SQLite> {
        let path = path.as_ref();
        info!(target: "Source", "Opening {:?}...", path);
        let connection = ok!(Connection::open(path));
        Ok(SQLite::with_connection(connection, query))
    }

    /// Use an open connection.
    pub fn with_connection(connection: Connection, query: Option<&str>) -> SQLite {
        SQLite { connection: connection, query: query.unwrap_or(QUERY).to_string() }
    }
}

impl Source for SQLite {
    fn read(&mut self) -> Result<Vec<Job>> {
        let jobs = read(&self.connection, &self.query)?;
        info!(target: "Source", "Read {} jobs.", jobs.len());
        Ok(jobs)
    }
}

fn read(connection: &Connection, query: &str) -> Result<Vec<Job>> {
    let mut statement = ok!(connection.prepare(query));
    let columns = statement.column_count();
    if columns < 2 || columns > 3 {
        raise!("expected the query to return 2 or 3 columns but got {}", columns);
    }
    let mut jobs = vec![];
    while let State::Row = ok!(statement.next()) {
        let burst = ok!(statement.read::<i64, usize>(0));
        let arrival = ok!(statement.read::<i64, usize>(1));
        let priority = if columns == 3 { ok!(statement.read::<i64, usize>(2)) } else { 0 };
        jobs.push(Job::new(jobs.len() + 1, burst, arrival, priority));
    }
    Ok(jobs)
}
