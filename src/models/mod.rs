//! Core data models for the Leave Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod leave_request;
mod reconciliation;

pub use holiday::{Holiday, HolidayCalendar};
pub use leave_request::{LeaveRequest, LeaveSplit};
pub use reconciliation::{Advisory, AdvisoryKind, BalanceDelta, ReconciliationResult};
