//! Workday classification and counting logic.
//!
//! This module provides the shared workday predicate and the inclusive-range
//! workday counter that the reconciliation orchestrator builds on. Saturdays,
//! Sundays, and any date in the supplied [`HolidayCalendar`] are not
//! workdays.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::HolidayCalendar;

/// Parses a `YYYY-MM-DD` date string.
///
/// Parsing is strict: exactly ten characters in `%Y-%m-%d` form (four-digit
/// year), and impossible calendar dates (e.g., `2024-02-30`) are rejected.
/// The function is total — any non-conforming input yields `None`, never a
/// panic or an error. The length check also keeps every day-by-day walker
/// bounded to four-digit years.
///
/// Dates are plain calendar days with no timezone attached, so a request
/// evaluated in one bureau never shifts by a day when stored or displayed in
/// another.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_date_iso;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date_iso("2024-03-04"),
///     NaiveDate::from_ymd_opt(2024, 3, 4),
/// );
/// assert_eq!(parse_date_iso("2024-02-30"), None);
/// assert_eq!(parse_date_iso("04/03/2024"), None);
/// assert_eq!(parse_date_iso(""), None);
/// ```
pub fn parse_date_iso(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Determines whether a date is a workday.
///
/// A workday is any Monday through Friday that is not present in the
/// holiday calendar. This is the single skip predicate shared by
/// [`count_workdays`] and every walker in
/// [`date_arithmetic`](crate::calculation::add_workdays), so the functions
/// always agree on which days count.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_workday;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::from_iso_strings(["2024-03-06"]);
///
/// // 2024-03-04 is a Monday
/// assert!(is_workday(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), &calendar));
/// // 2024-03-06 is a Wednesday, but a holiday
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), &calendar));
/// // 2024-03-09 is a Saturday
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), &calendar));
/// ```
pub fn is_workday(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !calendar.contains(date)
}

/// Counts the workdays in the inclusive range `[start_iso, end_iso]`.
///
/// # Arguments
///
/// * `start_iso` - The first day of the range, `YYYY-MM-DD`
/// * `end_iso` - The last day of the range, `YYYY-MM-DD`
/// * `calendar` - Holidays to exclude in addition to weekends
///
/// # Returns
///
/// The number of days in the range that are Monday through Friday and not
/// in the calendar. If either date fails to parse, or the end date precedes
/// the start date, the count is `0` — the function never fails and never
/// returns a negative value.
///
/// # Behavior
///
/// - The range is inclusive of both endpoints: a single-day range on a
///   workday counts `1`
/// - Cost is linear in the number of calendar days in the range; callers
///   should bound absurdly long ranges before calling
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::count_workdays;
/// use leave_engine::models::HolidayCalendar;
///
/// // 2024-03-04 (Mon) through 2024-03-08 (Fri)
/// let empty = HolidayCalendar::empty();
/// assert_eq!(count_workdays("2024-03-04", "2024-03-08", &empty), 5);
///
/// // Same week with the Wednesday as a holiday
/// let calendar = HolidayCalendar::from_iso_strings(["2024-03-06"]);
/// assert_eq!(count_workdays("2024-03-04", "2024-03-08", &calendar), 4);
///
/// // Weekend-only range
/// assert_eq!(count_workdays("2024-03-09", "2024-03-10", &empty), 0);
///
/// // Inverted or unparseable input
/// assert_eq!(count_workdays("2024-03-08", "2024-03-04", &empty), 0);
/// assert_eq!(count_workdays("not-a-date", "2024-03-04", &empty), 0);
/// ```
pub fn count_workdays(start_iso: &str, end_iso: &str, calendar: &HolidayCalendar) -> u32 {
    let (Some(start), Some(end)) = (parse_date_iso(start_iso), parse_date_iso(end_iso)) else {
        return 0;
    };
    if end < start {
        return 0;
    }

    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_workday(current, calendar) {
            count += 1;
        }
        current += chrono::Duration::days(1);
    }
    count
}
