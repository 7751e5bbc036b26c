//! Logging utilities for the application

use std::fmt::Display;

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for application messages
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        log(msg, self.verbosity, level);
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    /// Warnings go to stderr regardless of verbosity
    pub fn warn(&self, msg: &str) {
        eprintln!("warn: {msg}");
    }

    /// Get current verbosity level
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

/// Log a message if the verbosity level is at least the specified level
///
/// # Arguments
///
/// * `msg` - The message to log
/// * `verbosity` - The current verbosity level (0 = normal, 1 = info, 2+ = debug)
/// * `level` - The minimum level required for this message to be logged
pub fn log(msg: &str, verbosity: u8, level: LogLevel) {
    if verbosity >= level as u8 {
        match level {
            LogLevel::Normal => println!("{msg}"),
            LogLevel::Info => println!("info: {msg}"),
            LogLevel::Debug => println!("dbg: {msg}"),
        }
    }
}

/// Wrap a named operation with start / done / failed lines.
///
/// Everything `op` does, runtime setup included, happens between the start and
/// the done/failed line. The outcome is passed through untouched; mapping it to
/// an exit code is the caller's job.
pub fn log_lifecycle<T, E, F>(name: &str, logger: &Logger, op: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    logger.normal(&format!("{name} start"));
    let result = op();
    match &result {
        Ok(_) => logger.normal(&format!("{name} done")),
        Err(e) => eprintln!("{name} failed: {e}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_passes_outcome_through() {
        let logger = Logger::new(0);
        let ok: Result<u32, String> = log_lifecycle("op", &logger, || Ok(7));
        assert_eq!(ok, Ok(7));

        // failures raised before any real work still come back to the caller
        let mut calls = 0;
        let err: Result<(), String> = log_lifecycle("op", &logger, || {
            calls += 1;
            Err("Failed to create runtime: no threads".to_string())
        });
        assert_eq!(calls, 1);
        assert_eq!(err, Err("Failed to create runtime: no threads".to_string()));
    }
}
