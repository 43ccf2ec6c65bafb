//! Request types for the Leave Reconciliation Engine API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::LeaveRequest;

/// Request body for the `/reconcile` endpoint.
///
/// Dates travel as plain `YYYY-MM-DD` strings rather than parsed dates: a
/// malformed date is a reconciliation outcome (`invalid_range`), not a
/// transport error, so parsing is deferred to the core. Day counts travel
/// as raw numbers and are coerced by the split normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The previously stored request when editing; omitted for a new
    /// request.
    #[serde(default)]
    pub old_request: Option<LeaveRequestPayload>,
    /// The first day of the proposed range (inclusive).
    pub start_date: String,
    /// The last day of the proposed range (inclusive).
    pub end_date: String,
    /// Proposed days drawn from the annual-leave balance.
    #[serde(default)]
    pub annual_days: f64,
    /// Proposed days drawn from the off-day balance.
    #[serde(default)]
    pub off_days: f64,
    /// Ad-hoc holidays to honor in addition to the configured calendar,
    /// as `YYYY-MM-DD` strings.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Restrict the configured calendar to one region's observances;
    /// omitted means the full calendar.
    #[serde(default)]
    pub region: Option<String>,
}

/// A previously stored leave request in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestPayload {
    /// The first day of the stored range (inclusive).
    pub start_date: String,
    /// The last day of the stored range (inclusive).
    pub end_date: String,
    /// Stored annual days.
    pub annual_days: u32,
    /// Stored off days.
    pub off_days: u32,
    /// Stored workday requirement of the range.
    #[serde(default)]
    pub total_days: u32,
}

impl From<LeaveRequestPayload> for LeaveRequest {
    fn from(payload: LeaveRequestPayload) -> Self {
        LeaveRequest {
            start_date: payload.start_date,
            end_date: payload.end_date,
            annual_days: payload.annual_days,
            off_days: payload.off_days,
            total_days: payload.total_days,
        }
    }
}
