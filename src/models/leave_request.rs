//! Leave split and leave request models.
//!
//! This module contains the [`LeaveSplit`] and [`LeaveRequest`] types that
//! describe how a request's days are allocated across the two leave
//! categories.

use serde::{Deserialize, Serialize};

/// The allocation of a leave request's days across categories.
///
/// Annual days draw from the protected annual-leave balance; off days are
/// the more flexible allocation and are reduced first when a split exceeds
/// the workdays in the requested range.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveSplit;
///
/// let split = LeaveSplit {
///     annual_days: 2,
///     off_days: 3,
/// };
/// assert_eq!(split.total(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSplit {
    /// Days drawn from the annual-leave balance.
    pub annual_days: u32,
    /// Days drawn from the off-day balance.
    pub off_days: u32,
}

impl LeaveSplit {
    /// A split consuming no days from either balance.
    pub const ZERO: LeaveSplit = LeaveSplit {
        annual_days: 0,
        off_days: 0,
    };

    /// The combined number of days across both categories.
    pub fn total(&self) -> u32 {
        self.annual_days + self.off_days
    }
}

/// A leave request: a date range plus the split covering it.
///
/// This is the shape the reconciliation orchestrator returns as
/// `next_request` — the range and normalized split the caller should store,
/// with `total_days` set to the workdays the range requires.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveRequest;
///
/// let request = LeaveRequest {
///     start_date: "2024-03-04".to_string(),
///     end_date: "2024-03-08".to_string(),
///     annual_days: 2,
///     off_days: 3,
///     total_days: 5,
/// };
/// assert_eq!(request.split().total(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The first day of the requested range (inclusive), `YYYY-MM-DD`.
    pub start_date: String,
    /// The last day of the requested range (inclusive), `YYYY-MM-DD`.
    pub end_date: String,
    /// Days drawn from the annual-leave balance.
    pub annual_days: u32,
    /// Days drawn from the off-day balance.
    pub off_days: u32,
    /// The number of workdays the range requires.
    pub total_days: u32,
}

impl LeaveRequest {
    /// The request's split, detached from its range.
    pub fn split(&self) -> LeaveSplit {
        LeaveSplit {
            annual_days: self.annual_days,
            off_days: self.off_days,
        }
    }
}
