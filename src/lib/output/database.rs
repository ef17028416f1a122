use sqlite::{Connection, State};
use std::path::Path;

use output::Output;
use system::Report;
use Result;

/// An SQLite database.
///
/// Results are stored in the `results` table, one row per job; writing a
/// report replaces earlier rows of the same policy.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open or create a database.
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Database> {
        info!(target: "Output", "Opening {:?}...", path.as_ref());
        Database::with_connection(ok!(Connection::open(path)))
    }

    /// Use an open connection.
    pub fn with_connection(connection: Connection) -> Result<Database> {
        ok!(connection.execute("
            CREATE TABLE IF NOT EXISTS `results` (
                `policy` TEXT NOT NULL,
                `job` INTEGER NOT NULL,
                `waiting` INTEGER NOT NULL,
                `completion` INTEGER NOT NULL
            );
        "));
        Ok(Database { connection: connection })
    }

    fn insert(&self, report: &Report) -> Result<()> {
        let label = report.label();
        {
            let mut statement = ok!(self.connection.prepare(
                "DELETE FROM `results` WHERE `policy` = ?;"
            ));
            ok!(statement.bind((1, &*label)));
            if State::Done != ok!(statement.next()) {
                raise!("failed to clean the database");
            }
        }
        let mut statement = ok!(self.connection.prepare(
            "INSERT INTO `results` (`policy`, `job`, `waiting`, `completion`) VALUES (?, ?, ?, ?);"
        ));
        for (i, (&waiting, &completion)) in report.waiting.iter().zip(&report.completion).enumerate() {
            ok!(statement.reset());
            ok!(statement.bind((1, &*label)));
            ok!(statement.bind((2, (i + 1) as i64)));
            ok!(statement.bind((3, waiting)));
            ok!(statement.bind((4, completion)));
            if State::Done != ok!(statement.next()) {
                raise!("failed to write into the database");
            }
        }
        Ok(())
    }
}

impl Output for Database {
    fn write(&mut self, report: &Report) -> Result<()> {
        ok!(self.connection.execute("BEGIN TRANSACTION;"));
        match self.insert(report) {
            Ok(()) => {
                ok!(self.connection.execute("COMMIT;"));
                info!(target: "Output", "Wrote {} results.", report.waiting.len());
                Ok(())
            },
            Err(error) => {
                let _ = self.connection.execute("ROLLBACK;");
                Err(error)
            },
        }
    }
}
