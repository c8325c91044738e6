//! YAML logger configuration
//!
//! Default location: `<config dir>/logsetup/loggers.yaml`
//!
//! ```yaml
//! defaults:
//!   level: info
//!   directory: /var/log/analysis
//!   on_path_conflict: ignore
//! loggers:
//!   - name: sales_analysis
//!     path: sales_analysis.log
//!   - name: plots
//!     path: /tmp/plots.log
//!     level: debug
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::logging::{LogLevel, LoggerHandle, LoggerRegistry, PathConflictPolicy};

/// Settings applied to every declared logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingDefaults {
    /// Level used when a logger does not name its own
    #[serde(default)]
    pub level: LogLevel,
    /// Base directory for relative logger paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub on_path_conflict: PathConflictPolicy,
}

/// One logger declared in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerSpec {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

impl LoggerSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            level: None,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub defaults: LoggingDefaults,
    #[serde(default)]
    pub loggers: Vec<LoggerSpec>,
}

impl LoggingConfig {
    /// User-level config path (`~/.config/logsetup/loggers.yaml` on Linux)
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("logsetup").join("loggers.yaml")
    }

    /// Load from `path`; a missing file yields the default config
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {}", e)))
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize YAML: {}", e)))
    }

    /// Write to `path`, creating its directory if needed
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Effective file path of `spec`, relative paths joined onto `defaults.directory`
    pub fn resolve_path(&self, spec: &LoggerSpec) -> PathBuf {
        match &self.defaults.directory {
            Some(dir) if spec.path.is_relative() => dir.join(&spec.path),
            _ => spec.path.clone(),
        }
    }

    /// Effective level of `spec`
    pub fn resolve_level(&self, spec: &LoggerSpec) -> LogLevel {
        spec.level.unwrap_or(self.defaults.level)
    }
}

impl LoggerRegistry {
    /// An empty registry using the config's conflict policy
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::with_policy(config.defaults.on_path_conflict)
    }

    /// Provision every logger declared in `config`, stopping at the first failure
    pub fn provision_all(&self, config: &LoggingConfig) -> ConfigResult<Vec<Arc<LoggerHandle>>> {
        config
            .loggers
            .iter()
            .map(|spec| {
                self.provision(&spec.name, config.resolve_path(spec), config.resolve_level(spec))
                    .map_err(ConfigError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Logger, ProvisioningError};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig::load(dir.path().join("loggers.yaml")).unwrap();
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.defaults.level, LogLevel::Info);
        assert_eq!(config.defaults.on_path_conflict, PathConflictPolicy::Ignore);
    }

    #[test]
    fn test_parse_yaml() {
        let config = LoggingConfig::from_yaml_str(
            r#"
defaults:
  level: warning
  directory: /var/log/analysis
  on_path_conflict: error
loggers:
  - name: sales_analysis
    path: sales_analysis.log
  - name: plots
    path: /tmp/plots.log
    level: debug
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.on_path_conflict, PathConflictPolicy::Error);
        assert_eq!(config.loggers.len(), 2);

        let sales = &config.loggers[0];
        assert_eq!(config.resolve_path(sales), PathBuf::from("/var/log/analysis/sales_analysis.log"));
        assert_eq!(config.resolve_level(sales), LogLevel::Warning);

        let plots = &config.loggers[1];
        assert_eq!(config.resolve_path(plots), PathBuf::from("/tmp/plots.log"));
        assert_eq!(config.resolve_level(plots), LogLevel::Debug);
    }

    #[test]
    fn test_parse_error() {
        let err = LoggingConfig::from_yaml_str("loggers: [{ name: x, level: loud }]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf").join("loggers.yaml");

        let config = LoggingConfig {
            defaults: LoggingDefaults {
                directory: Some(dir.path().join("logs")),
                ..Default::default()
            },
            loggers: vec![LoggerSpec::new("sales", "sales.log").with_level(LogLevel::Error)],
        };
        config.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("sales.log"));
        assert!(content.contains("error"));

        assert_eq!(LoggingConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_provision_all() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig {
            defaults: LoggingDefaults {
                level: LogLevel::Warning,
                directory: Some(dir.path().join("logs")),
                on_path_conflict: PathConflictPolicy::Ignore,
            },
            loggers: vec![
                LoggerSpec::new("load", "load.log"),
                LoggerSpec::new("plot", "plots/plot.log").with_level(LogLevel::Debug),
            ],
        };

        let registry = LoggerRegistry::from_config(&config);
        let loggers = registry.provision_all(&config).unwrap();

        assert_eq!(loggers.len(), 2);
        assert_eq!(loggers[0].level(), LogLevel::Warning);
        assert_eq!(loggers[1].level(), LogLevel::Debug);
        assert!(dir.path().join("logs/plots").is_dir());

        loggers[1].debug("plot rendered");
        let content = fs::read_to_string(dir.path().join("logs/plots/plot.log")).unwrap();
        assert!(content.contains("DEBUG plot rendered"));
    }

    #[test]
    fn test_provision_all_stops_on_conflict() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig {
            defaults: LoggingDefaults {
                directory: Some(dir.path().to_path_buf()),
                on_path_conflict: PathConflictPolicy::Error,
                ..Default::default()
            },
            loggers: vec![
                LoggerSpec::new("dup", "a.log"),
                LoggerSpec::new("dup", "b.log"),
            ],
        };

        let registry = LoggerRegistry::from_config(&config);
        let err = registry.provision_all(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Provisioning(ProvisioningError::PathConflict { .. })
        ));
    }

    #[test]
    fn test_user_config_path() {
        let path = LoggingConfig::user_config_path();
        assert!(path.ends_with("logsetup/loggers.yaml"));
    }
}
