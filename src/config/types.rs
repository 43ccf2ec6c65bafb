//! Configuration types for holiday calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Metadata about a holiday calendar.
///
/// Identifies the calendar and records where its observance list came from.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar.
    pub name: String,
    /// The default region for entries that do not specify one.
    pub region: String,
    /// Where the observance list was sourced from.
    pub source: String,
}

/// A single holiday entry in a holiday file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Christmas Day").
    pub name: String,
    /// The region where this holiday applies.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// Holiday file structure (one file per year under `holidays/`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFileConfig {
    /// The holiday entries listed in the file.
    pub holidays: Vec<HolidayEntry>,
}
