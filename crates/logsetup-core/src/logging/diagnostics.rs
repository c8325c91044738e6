//! Internal diagnostic log for troubleshooting logsetup itself
//!
//! Provisioned loggers belong to the application; this one records what the
//! registry did (creations, ignored path conflicts, failed writes). It is off
//! unless `LOGSETUP_DEBUG` is set to `1` or `true`, and writes to
//! `<temp dir>/logsetup-debug.log`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use super::format::FormatTemplate;
use super::level::LogLevel;

/// Global diagnostic log configuration and state
struct DiagnosticState {
    file: Option<File>,
    min_level: LogLevel,
    template: FormatTemplate,
}

impl DiagnosticState {
    fn new() -> Self {
        let enabled = std::env::var("LOGSETUP_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let file = if enabled {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(Self::default_log_path())
                .ok()
        } else {
            None
        };

        let min_level = std::env::var("LOGSETUP_LOG_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogLevel::Debug);

        Self {
            file,
            min_level,
            template: FormatTemplate::new(),
        }
    }

    fn default_log_path() -> PathBuf {
        std::env::temp_dir().join("logsetup-debug.log")
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let line = self.template.render(level, &format!("[{}] {}", module, message));
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
        }
    }
}

static DIAGNOSTICS: OnceLock<Mutex<DiagnosticState>> = OnceLock::new();

fn diagnostics() -> &'static Mutex<DiagnosticState> {
    DIAGNOSTICS.get_or_init(|| Mutex::new(DiagnosticState::new()))
}

/// Record a diagnostic message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(mut state) = diagnostics().lock() {
        state.write(level, module, message);
    }
}

/// Whether diagnostics are being written anywhere
pub fn is_enabled() -> bool {
    diagnostics()
        .lock()
        .map(|state| state.file.is_some())
        .unwrap_or(false)
}

/// Path of the diagnostic log file
pub fn log_file_path() -> PathBuf {
    DiagnosticState::default_log_path()
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::diagnostics::log(
            $crate::logging::LogLevel::Debug,
            module_path!(),
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::diagnostics::log(
            $crate::logging::LogLevel::Warning,
            module_path!(),
            &format!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("logsetup-debug.log"));
    }

    #[test]
    fn test_logging() {
        // Just make sure it doesn't panic whether or not it is enabled
        let _ = is_enabled();
        crate::debug_log!("diagnostic {}", 1);
        crate::warn_log!("diagnostic {}", 2);
    }
}
