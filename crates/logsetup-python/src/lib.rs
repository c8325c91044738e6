//! Python bindings for logsetup via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::{PyOSError, PyValueError};
use std::sync::Arc;

use logsetup_core::logging::{
    global_registry,
    LogLevel as CoreLogLevel,
    Logger as CoreLogger,
    LoggerHandle as CoreLoggerHandle,
};

// ============================================================================
// Levels
// ============================================================================

/// Severity level enum
#[pyclass(eq, eq_int)]
#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    #[pyo3(name = "DEBUG")]
    Debug,
    #[pyo3(name = "INFO")]
    Info,
    #[pyo3(name = "WARNING")]
    Warning,
    #[pyo3(name = "ERROR")]
    Error,
    #[pyo3(name = "CRITICAL")]
    Critical,
}

#[pymethods]
impl LogLevel {
    fn __repr__(&self) -> String {
        format!("LogLevel.{}", CoreLogLevel::from(self.clone()))
    }
}

impl From<CoreLogLevel> for LogLevel {
    fn from(level: CoreLogLevel) -> Self {
        match level {
            CoreLogLevel::Debug => LogLevel::Debug,
            CoreLogLevel::Info => LogLevel::Info,
            CoreLogLevel::Warning => LogLevel::Warning,
            CoreLogLevel::Error => LogLevel::Error,
            CoreLogLevel::Critical => LogLevel::Critical,
        }
    }
}

impl From<LogLevel> for CoreLogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => CoreLogLevel::Debug,
            LogLevel::Info => CoreLogLevel::Info,
            LogLevel::Warning => CoreLogLevel::Warning,
            LogLevel::Error => CoreLogLevel::Error,
            LogLevel::Critical => CoreLogLevel::Critical,
        }
    }
}

/// Accepts either a `LogLevel` or a level name such as `"INFO"`
fn extract_level(level: &Bound<'_, PyAny>) -> PyResult<CoreLogLevel> {
    if let Ok(level) = level.extract::<LogLevel>() {
        return Ok(level.into());
    }
    let name: String = level.extract()?;
    name.parse::<CoreLogLevel>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

// ============================================================================
// Logger
// ============================================================================

/// A provisioned file logger
#[pyclass]
pub struct Logger {
    inner: Arc<CoreLoggerHandle>,
}

#[pymethods]
impl Logger {
    #[getter]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[getter]
    pub fn level(&self) -> LogLevel {
        self.inner.level().into()
    }

    pub fn set_level(&self, level: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.set_level(extract_level(level)?);
        Ok(())
    }

    #[getter]
    pub fn sink_path(&self) -> Option<String> {
        self.inner.sink_path().map(|p| p.to_string_lossy().to_string())
    }

    pub fn is_enabled_for(&self, level: &Bound<'_, PyAny>) -> PyResult<bool> {
        Ok(self.inner.is_enabled_for(extract_level(level)?))
    }

    pub fn log(&self, level: &Bound<'_, PyAny>, message: &str) -> PyResult<()> {
        self.inner
            .try_log(extract_level(level)?, message)
            .map_err(|e| PyOSError::new_err(e.to_string()))
    }

    pub fn debug(&self, message: &str) {
        self.inner.debug(message);
    }

    pub fn info(&self, message: &str) {
        self.inner.info(message);
    }

    pub fn warning(&self, message: &str) {
        self.inner.warning(message);
    }

    pub fn error(&self, message: &str) {
        self.inner.error(message);
    }

    pub fn critical(&self, message: &str) {
        self.inner.critical(message);
    }

    fn __repr__(&self) -> String {
        format!(
            "Logger(name='{}', level={}, sink='{}')",
            self.inner.name(),
            self.inner.level(),
            self.sink_path().unwrap_or_default()
        )
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Create or retrieve the logger `name` writing to `log_file`
///
/// Calling it again with the same name returns the same logger and never
/// adds a second file handler.
#[pyfunction]
#[pyo3(signature = (name, log_file, level=None))]
fn setup_logger(name: &str, log_file: &str, level: Option<&Bound<'_, PyAny>>) -> PyResult<Logger> {
    let level = match level {
        Some(level) => extract_level(level)?,
        None => CoreLogLevel::default(),
    };

    let inner = global_registry()
        .provision(name, log_file, level)
        .map_err(|e| PyOSError::new_err(e.to_string()))?;

    Ok(Logger { inner })
}

/// Return an already provisioned logger, if any
#[pyfunction]
fn get_logger(name: &str) -> Option<Logger> {
    global_registry().get(name).map(|inner| Logger { inner })
}

/// Names of all provisioned loggers
#[pyfunction]
fn list_loggers() -> Vec<String> {
    global_registry().names()
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn logsetup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LogLevel>()?;
    m.add_class::<Logger>()?;

    m.add_function(wrap_pyfunction!(setup_logger, m)?)?;
    m.add_function(wrap_pyfunction!(get_logger, m)?)?;
    m.add_function(wrap_pyfunction!(list_loggers, m)?)?;

    Ok(())
}
