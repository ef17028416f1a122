use log::{self, Level};

mod terminal;

use self::terminal::Terminal;

pub fn setup(level: Level) {
    if log::set_boxed_logger(Box::new(Terminal(level))).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}
