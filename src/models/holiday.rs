//! Holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types used to
//! define the non-workdays beyond weekends for workday counting.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_date_iso;

/// Represents a single newsroom holiday.
///
/// Holidays are non-workdays beyond weekends and are tracked per region to
/// support bureau-specific observances.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Christmas Day").
    pub name: String,
    /// The region where this holiday applies (e.g., "national", "emea").
    pub region: String,
}

/// A set of holiday dates used to classify workdays.
///
/// The calendar collapses duplicate dates and answers membership queries for
/// the day-by-day walkers in [`crate::calculation`]. Order of insertion is
/// irrelevant.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::from_iso_strings(["2024-03-06", "2024-03-06"]);
/// assert_eq!(calendar.len(), 1);
/// assert!(calendar.contains(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates an empty calendar (weekends are the only non-workdays).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a calendar from an iterator of dates. Duplicates collapse.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds a calendar from `YYYY-MM-DD` strings.
    ///
    /// Entries that do not parse are skipped: membership is by calendar
    /// date, and a malformed string can never name one.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::HolidayCalendar;
    ///
    /// let calendar = HolidayCalendar::from_iso_strings(["2024-01-01", "not-a-date"]);
    /// assert_eq!(calendar.len(), 1);
    /// ```
    pub fn from_iso_strings<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            dates: dates
                .into_iter()
                .filter_map(|s| parse_date_iso(s.as_ref()))
                .collect(),
        }
    }

    /// Checks whether the given date is a holiday in this calendar.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Adds a single date to the calendar.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Returns a new calendar containing the dates of both calendars.
    pub fn union(&self, other: &HolidayCalendar) -> HolidayCalendar {
        Self {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }

    /// The number of distinct holiday dates in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_calendar_contains_nothing() {
        let calendar = HolidayCalendar::empty();
        assert!(calendar.is_empty());
        assert!(!calendar.contains(make_date("2024-01-01")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let calendar = HolidayCalendar::from_dates(vec![
            make_date("2024-01-01"),
            make_date("2024-01-01"),
            make_date("2024-12-25"),
        ]);
        assert_eq!(calendar.len(), 2);
    }

    #[test]
    fn test_from_iso_strings_skips_invalid_entries() {
        let calendar =
            HolidayCalendar::from_iso_strings(["2024-01-01", "2024-13-40", "garbage", ""]);
        assert_eq!(calendar.len(), 1);
        assert!(calendar.contains(make_date("2024-01-01")));
    }

    #[test]
    fn test_union_merges_both_sets() {
        let configured = HolidayCalendar::from_iso_strings(["2024-01-01"]);
        let ad_hoc = HolidayCalendar::from_iso_strings(["2024-03-06", "2024-01-01"]);
        let merged = configured.union(&ad_hoc);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(make_date("2024-01-01")));
        assert!(merged.contains(make_date("2024-03-06")));
    }

    #[test]
    fn test_insert_adds_date() {
        let mut calendar = HolidayCalendar::empty();
        calendar.insert(make_date("2024-04-01"));
        assert!(calendar.contains(make_date("2024-04-01")));
        assert_eq!(calendar.len(), 1);
    }

    #[test]
    fn test_collect_from_iterator() {
        let calendar: HolidayCalendar =
            vec![make_date("2024-01-01"), make_date("2024-12-25")]
                .into_iter()
                .collect();
        assert_eq!(calendar.len(), 2);
    }

    #[test]
    fn test_serialize_holiday() {
        let holiday = Holiday {
            date: make_date("2024-12-25"),
            name: "Christmas Day".to_string(),
            region: "national".to_string(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2024-12-25\""));
        assert!(json.contains("\"name\":\"Christmas Day\""));
        assert!(json.contains("\"region\":\"national\""));
    }

    #[test]
    fn test_deserialize_holiday() {
        let json = r#"{
            "date": "2024-01-01",
            "name": "New Year's Day",
            "region": "national"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, make_date("2024-01-01"));
        assert_eq!(holiday.name, "New Year's Day");
        assert_eq!(holiday.region, "national");
    }
}
