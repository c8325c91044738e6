//! Configuration errors

use crate::logging::ProvisioningError;

/// Errors that can occur while loading or applying logger configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Parse(String),

    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
