//! Named file loggers
//!
//! - `LogLevel` / `FormatTemplate`: what a record looks like
//! - `FileSink`: append-mode file destination
//! - `LoggerHandle`: a named logger bound to at most one sink
//! - `LoggerRegistry`: idempotent create-or-retrieve by name, plus a process-wide default

mod error;
mod format;
mod handle;
mod level;
mod noop;
mod registry;
mod sink;
mod traits;
pub mod diagnostics;

pub use error::{ProvisioningError, ProvisioningResult};
pub use format::{FormatTemplate, DEFAULT_TIMESTAMP_FORMAT};
pub use handle::LoggerHandle;
pub use level::{LogLevel, ParseLevelError};
pub use noop::NoOpLogger;
pub use registry::{global_registry, provision, LoggerRegistry, PathConflictPolicy};
pub use sink::{ensure_parent_dir, FileSink};
pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
