//! Reconciliation result models for the Leave Reconciliation Engine.
//!
//! This module contains the [`ReconciliationResult`] type and its associated
//! structures that capture all outputs of a reconciliation, including the
//! advisory, the corrected request, and the balance delta.

use serde::{Deserialize, Serialize};

use super::LeaveRequest;

/// Classifies the mismatch between a date range and a selected split.
///
/// # Example
///
/// ```
/// use leave_engine::models::AdvisoryKind;
///
/// let kind = AdvisoryKind::SelectedTooFew;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"selected_too_few\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// The range requires zero workdays: unparseable dates, an inverted
    /// range, or a range containing only weekends/holidays.
    InvalidRange,
    /// Fewer days selected than the range requires.
    SelectedTooFew,
    /// More days selected than the range requires.
    SelectedTooMany,
}

impl std::fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryKind::InvalidRange => write!(f, "invalid_range"),
            AdvisoryKind::SelectedTooFew => write!(f, "selected_too_few"),
            AdvisoryKind::SelectedTooMany => write!(f, "selected_too_many"),
        }
    }
}

/// A structured hint describing a range/selection mismatch.
///
/// The `message` is plain text suitable for showing as-is in a prompt, or
/// for replacement with a localized equivalent keyed on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// The mismatch classification.
    #[serde(rename = "type")]
    pub kind: AdvisoryKind,
    /// Human-readable description of the mismatch.
    pub message: String,
    /// The workdays the range requires.
    pub required: u32,
    /// The days the user selected (after normalization).
    pub selected: u32,
    /// `selected - required`; negative when too few days are selected.
    pub mismatch: i32,
}

/// The signed change to apply to a user's stored leave balances.
///
/// Positive values consume more balance; negative values refund.
///
/// # Example
///
/// ```
/// use leave_engine::models::BalanceDelta;
///
/// let delta = BalanceDelta {
///     annual_delta: -1,
///     off_delta: 2,
/// };
/// assert_eq!(delta.annual_delta, -1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDelta {
    /// Change to the annual-leave balance.
    pub annual_delta: i32,
    /// Change to the off-day balance.
    pub off_delta: i32,
}

impl BalanceDelta {
    /// A delta leaving both balances untouched.
    pub const ZERO: BalanceDelta = BalanceDelta {
        annual_delta: 0,
        off_delta: 0,
    };
}

/// The complete result of reconciling a leave request.
///
/// Captures the workday requirement of the range, the normalized selection,
/// the advisory (if any), the corrected request for the caller to store, and
/// the balance delta to apply.
///
/// # Example
///
/// ```
/// use leave_engine::models::{BalanceDelta, LeaveRequest, ReconciliationResult};
///
/// let result = ReconciliationResult {
///     required_days: 5,
///     selected_days: 5,
///     mismatch: 0,
///     prompt: None,
///     next_request: LeaveRequest {
///         start_date: "2024-03-04".to_string(),
///         end_date: "2024-03-08".to_string(),
///         annual_days: 2,
///         off_days: 3,
///         total_days: 5,
///     },
///     delta: BalanceDelta {
///         annual_delta: 2,
///         off_delta: 3,
///     },
/// };
/// assert!(result.prompt.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// The workdays the requested range requires.
    pub required_days: u32,
    /// The normalized total of the user's selected split.
    pub selected_days: u32,
    /// `selected_days - required_days`, signed.
    pub mismatch: i32,
    /// The advisory to surface to the user, or `None` on an exact match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Advisory>,
    /// The corrected request: proposed range, normalized split, and the
    /// range's workday requirement as `total_days`.
    pub next_request: LeaveRequest,
    /// The balance adjustment relative to the previous request (or to a
    /// zero split for a new request).
    pub delta: BalanceDelta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ReconciliationResult {
        ReconciliationResult {
            required_days: 4,
            selected_days: 3,
            mismatch: -1,
            prompt: Some(Advisory {
                kind: AdvisoryKind::SelectedTooFew,
                message: "3 selected day(s) fall short of the 4 workday(s) in the range"
                    .to_string(),
                required: 4,
                selected: 3,
                mismatch: -1,
            }),
            next_request: LeaveRequest {
                start_date: "2024-03-04".to_string(),
                end_date: "2024-03-07".to_string(),
                annual_days: 1,
                off_days: 2,
                total_days: 4,
            },
            delta: BalanceDelta {
                annual_delta: 1,
                off_delta: 2,
            },
        }
    }

    #[test]
    fn test_advisory_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&AdvisoryKind::InvalidRange).unwrap(),
            "\"invalid_range\""
        );
        assert_eq!(
            serde_json::to_string(&AdvisoryKind::SelectedTooFew).unwrap(),
            "\"selected_too_few\""
        );
        assert_eq!(
            serde_json::to_string(&AdvisoryKind::SelectedTooMany).unwrap(),
            "\"selected_too_many\""
        );
    }

    #[test]
    fn test_advisory_kind_deserialization() {
        let kind: AdvisoryKind = serde_json::from_str("\"invalid_range\"").unwrap();
        assert_eq!(kind, AdvisoryKind::InvalidRange);

        let kind: AdvisoryKind = serde_json::from_str("\"selected_too_many\"").unwrap();
        assert_eq!(kind, AdvisoryKind::SelectedTooMany);
    }

    #[test]
    fn test_advisory_kind_display() {
        assert_eq!(format!("{}", AdvisoryKind::InvalidRange), "invalid_range");
        assert_eq!(
            format!("{}", AdvisoryKind::SelectedTooFew),
            "selected_too_few"
        );
        assert_eq!(
            format!("{}", AdvisoryKind::SelectedTooMany),
            "selected_too_many"
        );
    }

    #[test]
    fn test_advisory_serializes_kind_as_type() {
        let advisory = Advisory {
            kind: AdvisoryKind::SelectedTooMany,
            message: "too many".to_string(),
            required: 2,
            selected: 4,
            mismatch: 2,
        };
        let json = serde_json::to_string(&advisory).unwrap();
        assert!(json.contains("\"type\":\"selected_too_many\""));
        assert!(json.contains("\"required\":2"));
        assert!(json.contains("\"selected\":4"));
        assert!(json.contains("\"mismatch\":2"));
    }

    #[test]
    fn test_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"required_days\":4"));
        assert!(json.contains("\"selected_days\":3"));
        assert!(json.contains("\"mismatch\":-1"));
        assert!(json.contains("\"prompt\":{"));
        assert!(json.contains("\"next_request\":{"));
        assert!(json.contains("\"delta\":{"));
    }

    #[test]
    fn test_result_omits_null_prompt() {
        let mut result = sample_result();
        result.prompt = None;
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"prompt\""));
    }

    #[test]
    fn test_result_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ReconciliationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_negative_delta_means_refund() {
        let delta = BalanceDelta {
            annual_delta: -1,
            off_delta: -1,
        };
        let json = serde_json::to_string(&delta).unwrap();
        assert!(json.contains("\"annual_delta\":-1"));
        assert!(json.contains("\"off_delta\":-1"));
    }

    #[test]
    fn test_zero_delta_constant() {
        assert_eq!(BalanceDelta::ZERO, BalanceDelta::default());
    }
}
