//! Holiday calendar loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading holiday
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar};

use super::types::{CalendarMetadata, HolidayFileConfig};

/// Loads and provides access to a holiday calendar.
///
/// The `CalendarLoader` reads YAML configuration files from a directory and
/// builds the collapsed [`HolidayCalendar`] used for workday counting.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/newsroom/
/// ├── calendar.yaml    # Calendar metadata
/// └── holidays/
///     ├── 2024.yaml    # Holidays observed in 2024
///     └── 2025.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::CalendarLoader;
/// use chrono::NaiveDate;
///
/// let loader = CalendarLoader::load("./config/newsroom").unwrap();
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert!(loader.calendar().contains(christmas));
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    metadata: CalendarMetadata,
    holidays: Vec<Holiday>,
    calendar: HolidayCalendar,
}

impl CalendarLoader {
    /// Loads a holiday calendar from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/newsroom")
    ///
    /// # Returns
    ///
    /// Returns a `CalendarLoader` instance on success, or an error if:
    /// - `calendar.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::CalendarLoader;
    ///
    /// let loader = CalendarLoader::load("./config/newsroom")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load calendar.yaml
        let metadata_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&metadata_path)?;

        // Load all holiday files from the holidays directory
        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        let calendar = HolidayCalendar::from_dates(holidays.iter().map(|h| h.date));

        Ok(Self {
            metadata,
            holidays,
            calendar,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file_config = Self::load_yaml::<HolidayFileConfig>(&path)?;
                for entry in file_config.holidays {
                    holidays.push(Holiday {
                        date: entry.date,
                        name: entry.name,
                        region: entry.region,
                    });
                }
            }
        }

        Ok(holidays)
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns every loaded holiday, across all regions.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the collapsed date set for workday counting.
    ///
    /// Duplicate dates across files and regions collapse to one entry.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the date set for a single region.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalendarNotFound`] when no loaded holiday
    /// carries the requested region.
    pub fn calendar_for_region(&self, region: &str) -> EngineResult<HolidayCalendar> {
        let dates: Vec<_> = self
            .holidays
            .iter()
            .filter(|h| h.region == region)
            .map(|h| h.date)
            .collect();

        if dates.is_empty() {
            return Err(EngineError::CalendarNotFound {
                region: region.to_string(),
            });
        }

        Ok(HolidayCalendar::from_dates(dates))
    }
}
