use log::{Level, Log, Metadata, Record};
use term;

pub struct Terminal(pub Level);

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stdout = term::stdout();
        if let Some(ref mut stdout) = stdout {
            if record.level() < Level::Info {
                let _ = stdout.fg(term::color::RED);
            } else {
                let _ = stdout.fg(term::color::GREEN);
            }
        }
        print!("{:>12}", record.target());
        if let Some(ref mut stdout) = stdout {
            let _ = stdout.reset();
        }
        println!(" {}", record.args());
    }

    fn flush(&self) {
    }
}
