//! Named logger handle bound to at most one file sink

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::OnceCell;

use super::format::FormatTemplate;
use super::level::LogLevel;
use super::sink::FileSink;
use super::traits::Logger;

/// A named logger writing formatted lines to a single file sink.
///
/// The sink slot is set-once: [`LoggerHandle::attach_sink`] refuses a second
/// sink, so a handle can never emit the same record twice. The level is
/// mutable and shared by every holder of the handle.
pub struct LoggerHandle {
    name: String,
    level: AtomicU8,
    template: FormatTemplate,
    sink: OnceCell<FileSink>,
}

impl LoggerHandle {
    /// Create a handle with no sink attached
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self::with_template(name, level, FormatTemplate::default())
    }

    pub fn with_template(name: impl Into<String>, level: LogLevel, template: FormatTemplate) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(level.as_u8()),
            template,
            sink: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    /// Current minimum level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Release);
    }

    /// Whether a record at `level` would be written
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Bind `sink` if no sink is bound yet.
    ///
    /// Returns `false` (dropping `sink`) when the handle already has one.
    pub fn attach_sink(&self, sink: FileSink) -> bool {
        self.sink.set(sink).is_ok()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.get().is_some()
    }

    /// Number of attached sinks (never more than one)
    pub fn sink_count(&self) -> usize {
        usize::from(self.has_sink())
    }

    pub fn sink_path(&self) -> Option<&Path> {
        self.sink.get().map(FileSink::path)
    }

    /// Write `message` at `level`, reporting I/O failures to the caller.
    ///
    /// Sub-threshold records and handles without a sink are silent no-ops.
    pub fn try_log(&self, level: LogLevel, message: &str) -> io::Result<()> {
        if !self.is_enabled_for(level) {
            return Ok(());
        }
        match self.sink.get() {
            Some(sink) => sink.write_line(&self.template.render(level, message)),
            None => Ok(()),
        }
    }
}

impl Logger for LoggerHandle {
    fn log(&self, level: LogLevel, message: &str) {
        if let Err(e) = self.try_log(level, message) {
            crate::warn_log!("Logger '{}' failed to write record: {}", self.name, e);
        }
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("sink", &self.sink_path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_attach_sink_is_set_once() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        let handle = LoggerHandle::new("sales", LogLevel::Info);
        assert!(!handle.has_sink());
        assert_eq!(handle.sink_count(), 0);

        assert!(handle.attach_sink(FileSink::open(&first).unwrap()));
        assert!(!handle.attach_sink(FileSink::open(&second).unwrap()));

        assert_eq!(handle.sink_count(), 1);
        assert_eq!(handle.sink_path(), Some(first.as_path()));
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let handle = LoggerHandle::new("filter", LogLevel::Warning);
        handle.attach_sink(FileSink::open(&path).unwrap());

        handle.info("skip me");
        handle.error("keep me");

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" ERROR keep me"));
    }

    #[test]
    fn test_set_level() {
        let handle = LoggerHandle::new("levels", LogLevel::Info);
        assert!(!handle.is_enabled_for(LogLevel::Debug));

        handle.set_level(LogLevel::Debug);
        assert_eq!(handle.level(), LogLevel::Debug);
        assert!(handle.is_enabled_for(LogLevel::Debug));

        handle.set_level(LogLevel::Critical);
        assert!(!handle.is_enabled_for(LogLevel::Error));
        assert!(handle.is_enabled_for(LogLevel::Critical));
    }

    #[test]
    fn test_no_sink_is_noop() {
        let handle = LoggerHandle::new("unbound", LogLevel::Debug);
        assert!(handle.try_log(LogLevel::Critical, "nowhere to go").is_ok());
    }

    #[test]
    fn test_custom_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let handle = LoggerHandle::with_template(
            "custom",
            LogLevel::Info,
            FormatTemplate::with_timestamp_format("T").unwrap(),
        );
        handle.attach_sink(FileSink::open(&path).unwrap());
        handle.warning("disk almost full");

        assert_eq!(read_lines(&path), vec!["T WARNING disk almost full".to_string()]);
    }

    #[test]
    fn test_debug_output() {
        let handle = LoggerHandle::new("dbg", LogLevel::Error);
        let rendered = format!("{:?}", handle);
        assert!(rendered.contains("dbg"));
        assert!(rendered.contains("Error"));
    }
}
