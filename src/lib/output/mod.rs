//! Result output.

use std::path::Path;

use system::Report;
use Result;

mod database;
mod null;
mod text;

pub use self::database::Database;
pub use self::null::Null;
pub use self::text::Text;

/// An output.
pub trait Output {
    /// Persist a report.
    fn write(&mut self, report: &Report) -> Result<()>;
}

/// Create an output, choosing the kind by the extension of the file.
///
/// Without a path, reports are discarded.
pub fn new<T: AsRef<Path>>(path: Option<T>) -> Result<Box<dyn Output>> {
    let output: Box<dyn Output> = match path {
        Some(ref path) if ::source::is_database(path.as_ref()) => {
            Box::new(Database::new(path)?)
        },
        Some(path) => Box::new(Text::new(path)),
        _ => Box::new(Null),
    };
    Ok(output)
}
