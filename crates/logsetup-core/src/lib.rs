//! logsetup core
//!
//! Provisions named file loggers. Asking for the same name twice returns the
//! same logger, never a second file sink, so records are never duplicated.
//! Missing log directories are created on demand.
//!
//! ```rust,no_run
//! use logsetup_core::{provision, Logger, LogLevel};
//!
//! let logger = provision("sales_analysis", "logs/sales_analysis.log", LogLevel::Info)?;
//! logger.info("Loading sales data");
//! logger.warning("3 rows had no region");
//! # Ok::<(), logsetup_core::ProvisioningError>(())
//! ```
//!
//! Loggers can also be declared in YAML and provisioned together, see [`config`].

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use logging::{
    provision, global_registry,
    LogLevel, FormatTemplate, FileSink, LoggerHandle, LoggerRegistry,
    Logger, LoggerExt, NoOpLogger, SharedLogger,
    PathConflictPolicy, ProvisioningError, ProvisioningResult,
};

pub use config::{ConfigError, LoggerSpec, LoggingConfig, LoggingDefaults};
