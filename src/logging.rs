#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Logger writing `LEVEL - message` lines to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the level: explicit `level`, then the `BATTLESHIP_LOG` environment
/// variable, then `warn`.
pub fn log_level(level: Option<LevelFilter>) -> LevelFilter {
    level
        .or_else(|| env::var(LOG_ENV_VAR).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it twice keeps the first logger.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = log_level(level);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
