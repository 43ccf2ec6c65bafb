//! HTTP request handlers for the Leave Reconciliation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::reconcile;
use crate::models::{HolidayCalendar, LeaveRequest};

use super::request::ReconcileRequest;
use super::response::{ApiError, ApiErrorResponse, ReconcileResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Handler for POST /reconcile endpoint.
///
/// Accepts a proposed leave request and returns the reconciliation result.
/// Malformed JSON is a 400; malformed *date strings* are not — they flow to
/// the core and come back as an `invalid_range` advisory in a 200 response.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the configured calendar, restricted to one region if asked
    let configured = match request.region.as_deref() {
        Some(region) => match state.calendar().calendar_for_region(region) {
            Ok(calendar) => calendar,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    region = %region,
                    "Region not found"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        },
        None => state.calendar().calendar().clone(),
    };

    // Union the configured calendar with any request-supplied holidays
    let calendar = merge_calendars(&configured, &request.holidays);

    let old_request: Option<LeaveRequest> = request.old_request.map(Into::into);

    let result = reconcile(
        old_request.as_ref(),
        &request.start_date,
        &request.end_date,
        request.annual_days,
        request.off_days,
        &calendar,
    );

    let advisory = result
        .prompt
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.kind.to_string());
    info!(
        correlation_id = %correlation_id,
        required_days = result.required_days,
        selected_days = result.selected_days,
        mismatch = result.mismatch,
        advisory = %advisory,
        "Reconciliation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReconcileResponse::from_result(result)),
    )
        .into_response()
}

/// Builds the effective calendar for one request.
fn merge_calendars(configured: &HolidayCalendar, extra: &[String]) -> HolidayCalendar {
    if extra.is_empty() {
        return configured.clone();
    }
    configured.union(&HolidayCalendar::from_iso_strings(extra))
}
