//! Reconciliation orchestration.
//!
//! This module combines the workday counter, the split normalizer, and the
//! balance delta calculation into the single entry point a leave-edit
//! handler calls: one advisory result describing how the proposed request
//! relates to the workdays its range requires.

use crate::models::{
    Advisory, AdvisoryKind, HolidayCalendar, LeaveRequest, LeaveSplit, ReconciliationResult,
};

use super::balance_delta::leave_delta;
use super::split_normalizer::normalize_split;
use super::workday_count::count_workdays;

/// Reconciles a proposed leave request against its date range.
///
/// Counts the workdays in `[start_iso, end_iso]`, normalizes the proposed
/// split against that count, and produces the advisory, corrected request,
/// and balance delta for the caller to act on.
///
/// # Arguments
///
/// * `old_request` - The previously stored request when editing, or `None`
///   for a new request
/// * `start_iso`, `end_iso` - The proposed range, `YYYY-MM-DD`
/// * `annual_days`, `off_days` - The proposed split, as received from the
///   client
/// * `calendar` - Holidays to exclude in addition to weekends
///
/// # Returns
///
/// A [`ReconciliationResult`]. The function is total: unparseable dates,
/// inverted ranges, and ranges without a single workday all degrade to an
/// [`AdvisoryKind::InvalidRange`] advisory with zeroed counts — never an
/// error.
///
/// # Advisory selection
///
/// Evaluated in order, mutually exclusive:
///
/// 1. `required == 0` → `invalid_range`
/// 2. `selected < required` → `selected_too_few`
/// 3. `selected > required` → `selected_too_many`
/// 4. exact match → no advisory
///
/// # Example
///
/// ```
/// use leave_engine::calculation::reconcile;
/// use leave_engine::models::HolidayCalendar;
///
/// // Mon 2024-03-04 through Fri 2024-03-08, one day over-selected
/// let result = reconcile(
///     None,
///     "2024-03-04",
///     "2024-03-08",
///     2.0,
///     4.0,
///     &HolidayCalendar::empty(),
/// );
///
/// assert_eq!(result.required_days, 5);
/// assert_eq!(result.selected_days, 5); // off days reduced 4 -> 3
/// assert_eq!(result.mismatch, 0);
/// assert!(result.prompt.is_none());
/// assert_eq!(result.next_request.off_days, 3);
/// ```
pub fn reconcile(
    old_request: Option<&LeaveRequest>,
    start_iso: &str,
    end_iso: &str,
    annual_days: f64,
    off_days: f64,
    calendar: &HolidayCalendar,
) -> ReconciliationResult {
    let required = count_workdays(start_iso, end_iso, calendar);
    let normalized = normalize_split(required, annual_days, off_days);
    let selected = normalized.total;
    let mismatch = selected as i32 - required as i32;

    let prompt = select_advisory(required, selected, mismatch);

    let next_request = LeaveRequest {
        start_date: start_iso.to_string(),
        end_date: end_iso.to_string(),
        annual_days: normalized.annual_days,
        off_days: normalized.off_days,
        total_days: required,
    };

    let old_split = old_request.map(LeaveRequest::split).unwrap_or(LeaveSplit::ZERO);
    let delta = leave_delta(&old_split, &next_request.split());

    ReconciliationResult {
        required_days: required,
        selected_days: selected,
        mismatch,
        prompt,
        next_request,
        delta,
    }
}

/// Picks the advisory for a required/selected pair, if any.
fn select_advisory(required: u32, selected: u32, mismatch: i32) -> Option<Advisory> {
    if required == 0 {
        return Some(Advisory {
            kind: AdvisoryKind::InvalidRange,
            message: "The requested range contains no workdays; check the start and end dates"
                .to_string(),
            required,
            selected,
            mismatch,
        });
    }
    if mismatch < 0 {
        return Some(Advisory {
            kind: AdvisoryKind::SelectedTooFew,
            message: format!(
                "{selected} day(s) selected but the range requires {required} workday(s); \
                 add {} more",
                -mismatch
            ),
            required,
            selected,
            mismatch,
        });
    }
    if mismatch > 0 {
        return Some(Advisory {
            kind: AdvisoryKind::SelectedTooMany,
            message: format!(
                "{selected} day(s) selected but the range only requires {required} workday(s); \
                 remove {mismatch}"
            ),
            required,
            selected,
            mismatch,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn old_request(annual: u32, off: u32) -> LeaveRequest {
        LeaveRequest {
            start_date: "2024-02-05".to_string(),
            end_date: "2024-02-09".to_string(),
            annual_days: annual,
            off_days: off,
            total_days: annual + off,
        }
    }

    // ==========================================================================
    // RC-001: full week, exact selection, no advisory
    // ==========================================================================
    #[test]
    fn test_rc_001_exact_selection_no_advisory() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            2.0,
            3.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 5);
        assert_eq!(result.selected_days, 5);
        assert_eq!(result.mismatch, 0);
        assert!(result.prompt.is_none());
    }

    // ==========================================================================
    // RC-002: over-selection normalizes away and needs no advisory
    // ==========================================================================
    #[test]
    fn test_rc_002_over_selection_normalized_silently() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            2.0,
            4.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 5);
        assert_eq!(result.next_request.annual_days, 2);
        assert_eq!(result.next_request.off_days, 3);
        assert_eq!(result.mismatch, 0);
        assert!(result.prompt.is_none());
    }

    // ==========================================================================
    // RC-003: under-selection advises selected_too_few
    // ==========================================================================
    #[test]
    fn test_rc_003_under_selection_advises_too_few() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            1.0,
            2.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 5);
        assert_eq!(result.selected_days, 3);
        assert_eq!(result.mismatch, -2);

        let prompt = result.prompt.expect("advisory expected");
        assert_eq!(prompt.kind, AdvisoryKind::SelectedTooFew);
        assert_eq!(prompt.required, 5);
        assert_eq!(prompt.selected, 3);
        assert_eq!(prompt.mismatch, -2);
        assert!(prompt.message.contains("add 2 more"));
    }

    // ==========================================================================
    // RC-004: weekend-only range advises invalid_range
    // ==========================================================================
    #[test]
    fn test_rc_004_weekend_range_advises_invalid() {
        let result = reconcile(
            None,
            "2024-03-09",
            "2024-03-10",
            1.0,
            0.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 0);
        assert_eq!(result.selected_days, 0);
        assert_eq!(result.mismatch, 0);

        let prompt = result.prompt.expect("advisory expected");
        assert_eq!(prompt.kind, AdvisoryKind::InvalidRange);
    }

    // ==========================================================================
    // RC-005: unparseable dates degrade to invalid_range, never an error
    // ==========================================================================
    #[test]
    fn test_rc_005_unparseable_dates_degrade() {
        let result = reconcile(
            None,
            "not-a-date",
            "2024-03-08",
            2.0,
            3.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 0);
        assert_eq!(result.selected_days, 0);
        assert_eq!(
            result.prompt.expect("advisory expected").kind,
            AdvisoryKind::InvalidRange
        );
        // The proposed range is echoed back as-is
        assert_eq!(result.next_request.start_date, "not-a-date");
        assert_eq!(result.next_request.total_days, 0);
    }

    // ==========================================================================
    // RC-006: inverted range advises invalid_range
    // ==========================================================================
    #[test]
    fn test_rc_006_inverted_range_advises_invalid() {
        let result = reconcile(
            None,
            "2024-03-08",
            "2024-03-04",
            2.0,
            3.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 0);
        assert_eq!(
            result.prompt.expect("advisory expected").kind,
            AdvisoryKind::InvalidRange
        );
    }

    // ==========================================================================
    // RC-007: editing down refunds through the delta
    // ==========================================================================
    #[test]
    fn test_rc_007_editing_down_refunds() {
        // Mon-Wed requires 3; old request held 5 days
        let old = old_request(2, 3);
        let result = reconcile(
            Some(&old),
            "2024-03-04",
            "2024-03-06",
            1.0,
            2.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.required_days, 3);
        assert!(result.prompt.is_none());
        assert_eq!(result.delta.annual_delta, -1);
        assert_eq!(result.delta.off_delta, -1);
    }

    // ==========================================================================
    // RC-008: new request consumes the normalized split
    // ==========================================================================
    #[test]
    fn test_rc_008_new_request_delta_from_zero() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            2.0,
            3.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.delta.annual_delta, 2);
        assert_eq!(result.delta.off_delta, 3);
    }

    // ==========================================================================
    // RC-009: holiday in range lowers the requirement
    // ==========================================================================
    #[test]
    fn test_rc_009_holiday_lowers_requirement() {
        let calendar = HolidayCalendar::from_iso_strings(["2024-03-06"]);
        let result = reconcile(None, "2024-03-04", "2024-03-08", 2.0, 2.0, &calendar);
        assert_eq!(result.required_days, 4);
        assert_eq!(result.mismatch, 0);
        assert!(result.prompt.is_none());
    }

    #[test]
    fn test_normalization_cap_wins_before_too_many_arm() {
        // The cap in normalize_split fires before the too-many advisory can
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            9.0,
            9.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.selected_days, 5);
        assert_eq!(result.mismatch, 0);
        assert!(result.prompt.is_none());
    }

    #[test]
    fn test_select_advisory_too_many_arm() {
        // Reachable for callers that bypass normalization
        let prompt = select_advisory(3, 5, 2).expect("advisory expected");
        assert_eq!(prompt.kind, AdvisoryKind::SelectedTooMany);
        assert!(prompt.message.contains("remove 2"));
    }

    #[test]
    fn test_select_advisory_order_prefers_invalid_range() {
        // required == 0 wins even when the selection also mismatches
        let prompt = select_advisory(0, 3, 3).expect("advisory expected");
        assert_eq!(prompt.kind, AdvisoryKind::InvalidRange);
    }

    #[test]
    fn test_next_request_echoes_range_and_requirement() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            0.0,
            0.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.next_request.start_date, "2024-03-04");
        assert_eq!(result.next_request.end_date, "2024-03-08");
        assert_eq!(result.next_request.total_days, 5);
        assert_eq!(
            result.prompt.expect("advisory expected").kind,
            AdvisoryKind::SelectedTooFew
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let old = old_request(1, 1);
        let first = reconcile(
            Some(&old),
            "2024-03-04",
            "2024-03-06",
            1.0,
            2.0,
            &HolidayCalendar::empty(),
        );
        let second = reconcile(
            Some(&old),
            "2024-03-04",
            "2024-03-06",
            1.0,
            2.0,
            &HolidayCalendar::empty(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_client_numbers_coerced() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-08",
            f64::NAN,
            2.6,
            &HolidayCalendar::empty(),
        );
        assert_eq!(result.selected_days, 3);
        assert_eq!(result.next_request.annual_days, 0);
        assert_eq!(result.next_request.off_days, 3);
    }

    #[test]
    fn test_advisory_messages_carry_counts() {
        let result = reconcile(
            None,
            "2024-03-04",
            "2024-03-05",
            1.0,
            0.0,
            &HolidayCalendar::empty(),
        );
        let prompt = result.prompt.expect("advisory expected");
        assert_eq!(prompt.kind, AdvisoryKind::SelectedTooFew);
        assert!(prompt.message.contains('1'));
        assert!(prompt.message.contains('2'));
    }
}
