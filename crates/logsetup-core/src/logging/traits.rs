//! Logger trait definition

use std::sync::Arc;

use super::level::LogLevel;

/// Leveled logging surface shared by provisioned handles and stand-ins
///
/// Implementations:
/// - `LoggerHandle`: writes formatted lines to its file sink
/// - `NoOpLogger`: silent, for callers that carry on without logging
pub trait Logger: Send + Sync {
    /// Submit a message at `level`. Records below the threshold are dropped.
    fn log(&self, level: LogLevel, message: &str);

    /// Log a debug message
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log a critical message
    fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn log_fmt(&self, level: LogLevel, args: std::fmt::Arguments<'_>) {
        self.log(level, &args.to_string());
    }

    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    fn warning_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warning, args);
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    fn critical_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Critical, args);
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.debug(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.info(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.warning(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.error(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.critical(&format!($($arg)*))
        }
    };
}
