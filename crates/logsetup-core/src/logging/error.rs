//! Provisioning errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while provisioning a logger
#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error("Logger name must not be empty")]
    EmptyName,

    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestampFormat(String),

    #[error(
        "Logger '{name}' already writes to {}, refusing to rebind it to {}",
        .existing.display(),
        .requested.display()
    )]
    PathConflict {
        name: String,
        existing: PathBuf,
        requested: PathBuf,
    },
}

pub type ProvisioningResult<T> = Result<T, ProvisioningError>;
