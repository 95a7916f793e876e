#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes records to stderr so stdout stays free for the puzzle itself.
/// Debug and trace lines carry the module that emitted them.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = if record.level() >= log::Level::Debug {
            writeln!(err, "{:<5} [{}] {}", record.level(), record.target(), record.args())
        } else {
            writeln!(err, "{:<5} {}", record.level(), record.args())
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parses a level name such as `debug` or `OFF`, falling back to `default`
/// when the value is missing or not a level.
pub(crate) fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger.
///
/// An explicit `level` wins; otherwise the `WORDSEARCH_LOG` environment
/// variable is consulted, then `info`. Calling this twice keeps the first logger.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(|| {
        level_from(env::var(LOG_ENV_VAR).ok().as_deref(), LevelFilter::Info)
    });
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(level_from(Some(" WARN "), LevelFilter::Info), LevelFilter::Warn);
        assert_eq!(level_from(Some("off"), LevelFilter::Info), LevelFilter::Off);
        assert_eq!(level_from(Some("loud"), LevelFilter::Info), LevelFilter::Info);
        assert_eq!(level_from(None, LevelFilter::Error), LevelFilter::Error);
    }
}
