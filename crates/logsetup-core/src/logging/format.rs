//! Line format for log records

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use super::error::{ProvisioningError, ProvisioningResult};
use super::level::LogLevel;

/// Default timestamp pattern: `2024-05-01 13:45:12,042`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Renders one record as `<timestamp> <LEVELNAME> <message>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    timestamp_format: String,
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatTemplate {
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use a different chrono strftime pattern for the timestamp.
    ///
    /// Patterns chrono cannot render are rejected here, so rendering never fails.
    pub fn with_timestamp_format(pattern: impl Into<String>) -> ProvisioningResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ProvisioningError::InvalidTimestampFormat(pattern));
        }
        Ok(Self {
            timestamp_format: pattern,
        })
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Render a record stamped with the current local time
    pub fn render(&self, level: LogLevel, message: &str) -> String {
        self.render_at(&Local::now(), level, message)
    }

    /// Render a record with an explicit timestamp (no trailing newline)
    pub fn render_at(&self, timestamp: &DateTime<Local>, level: LogLevel, message: &str) -> String {
        format!("{} {} {}", timestamp.format(&self.timestamp_format), level, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 13, 45, 12)
            .single()
            .unwrap()
    }

    #[test]
    fn test_default_layout() {
        let template = FormatTemplate::new();
        let line = template.render_at(&fixed_time(), LogLevel::Info, "loaded 42 rows");
        assert_eq!(line, "2024-05-01 13:45:12,000 INFO loaded 42 rows");
    }

    #[test]
    fn test_custom_timestamp() {
        let template = FormatTemplate::with_timestamp_format("%H:%M").unwrap();
        let line = template.render_at(&fixed_time(), LogLevel::Critical, "boom");
        assert_eq!(line, "13:45 CRITICAL boom");
    }

    #[test]
    fn test_rejects_unknown_specifier() {
        let err = FormatTemplate::with_timestamp_format("%Q").unwrap_err();
        assert!(matches!(err, ProvisioningError::InvalidTimestampFormat(p) if p == "%Q"));

        // A dangling '%' is just as unrenderable
        assert!(FormatTemplate::with_timestamp_format("%Y-%").is_err());
        assert!(FormatTemplate::with_timestamp_format("%Y-%m-%dT%H:%M:%S%.3f").is_ok());
    }

    #[test]
    fn test_render_now_has_three_parts() {
        let line = FormatTemplate::new().render(LogLevel::Warning, "careful");
        assert!(line.ends_with(" WARNING careful"));
        assert!(!line.ends_with('\n'));
    }
}
