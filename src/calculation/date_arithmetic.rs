//! Workday date arithmetic.
//!
//! This module provides the forward-walking date helpers used by leave forms
//! and handlers: advancing a date by a number of workdays, finding the next
//! workday, and finding the end date that makes a range contain a desired
//! workday count. All three share the skip predicate in
//! [`is_workday`](super::is_workday).

use chrono::NaiveDate;

use crate::models::HolidayCalendar;

use super::workday_count::{is_workday, parse_date_iso};

/// Advances a date by exactly `n` workdays.
///
/// The start day itself is never counted, whether or not it is a workday:
/// the walk moves strictly forward, skipping weekends and calendar holidays,
/// until `n` workdays have been passed.
///
/// # Arguments
///
/// * `start_iso` - The date to advance from, `YYYY-MM-DD`
/// * `n` - The number of workdays to advance; negative values clamp to 0
/// * `calendar` - Holidays to skip in addition to weekends
///
/// # Returns
///
/// The reached date as a `YYYY-MM-DD` string, or `""` when `start_iso` does
/// not parse. `n == 0` returns the start date itself.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::add_workdays;
/// use leave_engine::models::HolidayCalendar;
///
/// let empty = HolidayCalendar::empty();
///
/// // Friday + 1 workday lands on Monday
/// assert_eq!(add_workdays("2024-03-08", 1, &empty), "2024-03-11");
///
/// // Monday + 5 workdays lands on the next Monday
/// assert_eq!(add_workdays("2024-03-04", 5, &empty), "2024-03-11");
///
/// // A holiday on the Wednesday pushes the walk one day further
/// let calendar = HolidayCalendar::from_iso_strings(["2024-03-06"]);
/// assert_eq!(add_workdays("2024-03-04", 2, &calendar), "2024-03-07");
///
/// assert_eq!(add_workdays("2024-03-04", 0, &empty), "2024-03-04");
/// assert_eq!(add_workdays("not-a-date", 3, &empty), "");
/// ```
pub fn add_workdays(start_iso: &str, n: i64, calendar: &HolidayCalendar) -> String {
    let Some(start) = parse_date_iso(start_iso) else {
        return String::new();
    };

    let mut remaining = n.max(0);
    let mut current = start;
    while remaining > 0 {
        current += chrono::Duration::days(1);
        if is_workday(current, calendar) {
            remaining -= 1;
        }
    }
    format_date_iso(current)
}

/// Returns the first workday strictly after `date_iso`.
///
/// Equivalent to [`add_workdays`] with `n = 1`; both walk with the same
/// skip predicate.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::next_workday;
/// use leave_engine::models::HolidayCalendar;
///
/// let empty = HolidayCalendar::empty();
///
/// // The workday after Friday is Monday
/// assert_eq!(next_workday("2024-03-08", &empty), "2024-03-11");
///
/// // The workday after Saturday is also Monday
/// assert_eq!(next_workday("2024-03-09", &empty), "2024-03-11");
///
/// assert_eq!(next_workday("bad input", &empty), "");
/// ```
pub fn next_workday(date_iso: &str, calendar: &HolidayCalendar) -> String {
    add_workdays(date_iso, 1, calendar)
}

/// Finds the end date that gives a range a desired workday count.
///
/// Returns the date such that the inclusive range `[start_iso, result]`
/// contains exactly `desired_workdays` workdays.
///
/// `desired_workdays <= 1` returns `start_iso` unchanged, even when the
/// start day is itself a weekend or holiday. Callers wanting a guaranteed
/// workday must check the start date separately.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::end_date_for_workday_count;
/// use leave_engine::models::HolidayCalendar;
///
/// let empty = HolidayCalendar::empty();
///
/// // Five workdays starting Monday end on Friday
/// assert_eq!(end_date_for_workday_count("2024-03-04", 5, &empty), "2024-03-08");
///
/// // Six workdays starting Monday cross the weekend
/// assert_eq!(end_date_for_workday_count("2024-03-04", 6, &empty), "2024-03-11");
///
/// // The short-circuit returns the start date as-is, workday or not
/// assert_eq!(end_date_for_workday_count("2024-03-09", 1, &empty), "2024-03-09");
///
/// assert_eq!(end_date_for_workday_count("nope", 5, &empty), "");
/// ```
pub fn end_date_for_workday_count(
    start_iso: &str,
    desired_workdays: i64,
    calendar: &HolidayCalendar,
) -> String {
    let Some(start) = parse_date_iso(start_iso) else {
        return String::new();
    };
    if desired_workdays <= 1 {
        return start_iso.to_string();
    }

    let mut count = if is_workday(start, calendar) { 1 } else { 0 };
    let mut current = start;
    while count < desired_workdays {
        current += chrono::Duration::days(1);
        if is_workday(current, calendar) {
            count += 1;
        }
    }
    format_date_iso(current)
}

/// Formats a date back to its `YYYY-MM-DD` wire form.
fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
