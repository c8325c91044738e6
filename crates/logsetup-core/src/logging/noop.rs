//! No-op logger implementation

use super::level::LogLevel;
use super::traits::Logger;

/// A logger that does nothing
///
/// Stand-in for a caller that decides to continue when provisioning fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
