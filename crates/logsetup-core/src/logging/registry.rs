//! Logger registry: create-or-retrieve named loggers

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::error::{ProvisioningError, ProvisioningResult};
use super::format::FormatTemplate;
use super::handle::LoggerHandle;
use super::level::LogLevel;
use super::sink::{ensure_parent_dir, FileSink};

/// What to do when an existing logger is requested with a different file path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathConflictPolicy {
    /// Keep the original sink and return the existing handle
    #[default]
    Ignore,
    /// Fail with [`ProvisioningError::PathConflict`]
    Error,
}

/// Registry mapping logger names to their handles
///
/// Each registry is independent, so tests and embedders can own one instead of
/// sharing [`global_registry`].
///
/// # Example
///
/// ```no_run
/// use logsetup_core::logging::{Logger, LoggerRegistry, LogLevel};
///
/// let registry = LoggerRegistry::new();
/// let logger = registry.provision("sales", "logs/sales.log", LogLevel::Info)?;
/// logger.info("loaded data");
/// # Ok::<(), logsetup_core::logging::ProvisioningError>(())
/// ```
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<LoggerHandle>>>,
    on_path_conflict: PathConflictPolicy,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::with_policy(PathConflictPolicy::default())
    }

    pub fn with_policy(on_path_conflict: PathConflictPolicy) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            on_path_conflict,
        }
    }

    pub fn policy(&self) -> PathConflictPolicy {
        self.on_path_conflict
    }

    /// Create or retrieve the logger called `name`.
    ///
    /// For a new logger the parent directory of `log_file` is created when
    /// missing and exactly one append-mode sink is opened at `log_file`. An
    /// existing logger keeps its sink and nothing is touched on disk. The level
    /// is set to `level` on every call.
    pub fn provision(
        &self,
        name: &str,
        log_file: impl AsRef<Path>,
        level: LogLevel,
    ) -> ProvisioningResult<Arc<LoggerHandle>> {
        self.provision_with_template(name, log_file, level, FormatTemplate::default())
    }

    /// Like [`LoggerRegistry::provision`], using `template` if the logger is new
    pub fn provision_with_template(
        &self,
        name: &str,
        log_file: impl AsRef<Path>,
        level: LogLevel,
        template: FormatTemplate,
    ) -> ProvisioningResult<Arc<LoggerHandle>> {
        let log_file = log_file.as_ref();
        if name.trim().is_empty() {
            return Err(ProvisioningError::EmptyName);
        }

        // Lookup, directory creation, sink creation and insertion happen under one lock
        let mut loggers = self.loggers.lock();

        if let Some(existing) = loggers.get(name) {
            let handle = Arc::clone(existing);
            drop(loggers);
            self.check_path(&handle, log_file)?;
            handle.set_level(level);
            return Ok(handle);
        }

        ensure_parent_dir(log_file)?;
        let sink = FileSink::open(log_file)?;
        let handle = Arc::new(LoggerHandle::with_template(name, level, template));
        handle.attach_sink(sink);
        loggers.insert(name.to_string(), Arc::clone(&handle));
        drop(loggers);

        crate::debug_log!(
            "Provisioned logger '{}' -> {} at {}",
            name,
            log_file.display(),
            level
        );
        Ok(handle)
    }

    fn check_path(&self, handle: &LoggerHandle, requested: &Path) -> ProvisioningResult<()> {
        let existing = match handle.sink_path() {
            Some(existing) if existing != requested => existing,
            _ => return Ok(()),
        };

        match self.on_path_conflict {
            PathConflictPolicy::Ignore => {
                crate::warn_log!(
                    "Logger '{}' already writes to {}, ignoring requested path {}",
                    handle.name(),
                    existing.display(),
                    requested.display()
                );
                Ok(())
            }
            PathConflictPolicy::Error => Err(ProvisioningError::PathConflict {
                name: handle.name().to_string(),
                existing: existing.to_path_buf(),
                requested: requested.to_path_buf(),
            }),
        }
    }

    /// Get an already provisioned logger
    pub fn get(&self, name: &str) -> Option<Arc<LoggerHandle>> {
        self.loggers.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Names of all provisioned loggers, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget a logger (mainly for testing). Existing handles keep working.
    pub fn remove(&self, name: &str) -> Option<Arc<LoggerHandle>> {
        self.loggers.lock().remove(name)
    }
}

/// Process-wide registry
static GLOBAL_REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

pub fn global_registry() -> &'static LoggerRegistry {
    &GLOBAL_REGISTRY
}

/// Create or retrieve a logger in the process-wide registry
///
/// # Example
///
/// ```no_run
/// use logsetup_core::logging::{provision, Logger, LogLevel};
///
/// let logger = provision("sales_analysis", "logs/sales_analysis.log", LogLevel::Info)?;
/// logger.info("Loading sales data");
/// # Ok::<(), logsetup_core::logging::ProvisioningError>(())
/// ```
pub fn provision(
    name: &str,
    log_file: impl AsRef<Path>,
    level: LogLevel,
) -> ProvisioningResult<Arc<LoggerHandle>> {
    GLOBAL_REGISTRY.provision(name, log_file, level)
}
