//! HTTP API module for the Leave Reconciliation Engine.
//!
//! This module provides the REST endpoint for reconciling leave requests
//! against the newsroom holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReconcileRequest;
pub use response::{ApiError, ReconcileResponse};
pub use state::AppState;
