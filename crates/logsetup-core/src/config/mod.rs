//! Logger configuration from YAML files
//!
//! Declares loggers (name, path, level) plus defaults, and provisions them
//! into a `LoggerRegistry` in one step.

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{LoggerSpec, LoggingConfig, LoggingDefaults};
