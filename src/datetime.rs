//! Date/time rendering and lenient parsing for the `Date/Time` line
//!
//! The Markdown line carries a human, locale-shaped timestamp. Rendering
//! uses a configurable strftime pattern; parsing is best-effort and tries a
//! list of common shapes before giving up with `None`.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, Timelike};

/// Shape of `Date::toLocaleString()` in an en-US locale, e.g. `3/14/2025, 2:05:00 PM`
pub const DEFAULT_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Value format of a `datetime-local` form input
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Shapes accepted on import besides the configured one
const FALLBACK_FORMATS: &[&str] = &[
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y, %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Get the current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// How the `Date/Time` line is written and read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStyle {
    format: String,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl DateStyle {
    /// Create a style from a chrono strftime pattern
    ///
    /// # Errors
    /// Returns an error when the pattern contains an unknown specifier;
    /// chrono would otherwise fail while rendering.
    pub fn new(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if format.trim().is_empty() {
            bail!("Date/time format must not be empty");
        }
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            bail!(
                "Invalid date/time format '{}'. Use chrono strftime specifiers (e.g., '{}')",
                format,
                DEFAULT_DATETIME_FORMAT
            );
        }
        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn render(&self, value: &NaiveDateTime) -> String {
        value.format(&self.format).to_string()
    }

    /// Parse a rendered timestamp, truncated to the minute
    ///
    /// Returns `None` for anything that does not look like a date and time.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        std::iter::once(self.format.as_str())
            .chain(FALLBACK_FORMATS.iter().copied())
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|dt| dt.with_timezone(&Local).naive_local())
            })
            .map(truncate_to_minute)
    }
}

/// Drop seconds and sub-second precision
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

/// Round down to the previous quarter hour
pub fn round_to_previous_15_minutes(value: NaiveDateTime) -> NaiveDateTime {
    let minute = value.minute() / 15 * 15;
    let truncated = truncate_to_minute(value);
    truncated.with_minute(minute).unwrap_or(truncated)
}

/// Format as a `datetime-local` input value (`YYYY-MM-DDTHH:MM`)
pub fn format_datetime_local(value: &NaiveDateTime) -> String {
    value.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Parse a `datetime-local` input value
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL_FORMAT).ok()
}

/// Default value for the held-at field: now, rounded down to 15 minutes
pub fn default_meeting_time(now: NaiveDateTime) -> String {
    format_datetime_local(&round_to_previous_15_minutes(now))
}
