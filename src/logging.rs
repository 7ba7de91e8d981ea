//! Logging seam
//!
//! A small capability trait instead of a global logger: the sink is picked
//! once at startup (`--debug` selects the stderr sink, otherwise the no-op
//! sink) and passed down explicitly to whoever needs to log.

use std::fmt;

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        };
        f.write_str(label)
    }
}

/// Logging capability handed to the session and actors.
pub trait GameLog {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Real sink: level-filtered lines on stderr.
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl GameLog for StderrLog {
    fn log(&self, level: LogLevel, message: &str) {
        if level >= self.min_level {
            eprintln!("[{level}] {message}");
        }
    }
}

/// No-op sink: the default when `--debug` is off.
pub struct NopLog;

impl GameLog for NopLog {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
