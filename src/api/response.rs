//! Response types for the Leave Reconciliation Engine API.
//!
//! This module defines the success envelope and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Advisory, BalanceDelta, LeaveRequest, ReconciliationResult};

/// Response body for a successful `/reconcile` call.
///
/// Wraps the core [`ReconciliationResult`] fields in an envelope carrying a
/// correlation id, timestamp, and the engine version, so the consuming
/// handler can log and trace the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// Unique identifier for this reconciliation.
    pub reconciliation_id: Uuid,
    /// When the reconciliation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the reconciliation.
    pub engine_version: String,
    /// The workdays the requested range requires.
    pub required_days: u32,
    /// The normalized total of the user's selected split.
    pub selected_days: u32,
    /// `selected_days - required_days`, signed.
    pub mismatch: i32,
    /// The advisory to surface to the user, or absent on an exact match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Advisory>,
    /// The corrected request for the caller to store.
    pub next_request: LeaveRequest,
    /// The balance adjustment to apply.
    pub delta: BalanceDelta,
}

impl ReconcileResponse {
    /// Wraps a core result in the response envelope.
    pub fn from_result(result: ReconciliationResult) -> Self {
        Self {
            reconciliation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            required_days: result.required_days,
            selected_days: result.selected_days,
            mismatch: result.mismatch,
            prompt: result.prompt,
            next_request: result.next_request,
            delta: result.delta,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a calendar-not-found error response.
    pub fn calendar_not_found(region: &str) -> Self {
        Self::with_details(
            "CALENDAR_NOT_FOUND",
            format!("Holiday calendar not found for region: {}", region),
            format!("No configured holiday carries the region '{}'", region),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalendarNotFound { region } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::calendar_not_found(&region),
            },
        }
    }
}
