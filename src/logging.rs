#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level, e.g. `SALVO_LOG=debug`.
pub const LOG_ENV: &str = "SALVO_LOG";

/// Game text owns stdout and players read it, so records go to stderr and
/// can be dropped with `2>/dev/null`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name as accepted in [`LOG_ENV`]: `off`, `error`, `warn`,
/// `info`, `debug` or `trace`, in any case.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Level from [`LOG_ENV`]. Engine events are logged at `info` and below,
/// so the default `warn` keeps a normal game quiet.
pub fn log_level() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(LevelFilter::Warn)
}

/// Route `log` records of the whole process to stderr. Only the first call
/// installs the logger; later calls leave the level untouched.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log_level());
    }
}
