//! Health check routes.
//!
//! DESIGN
//! ======
//! `HealthCheck::execute` builds the report from `AppState` and a clock
//! reading, independent of HTTP. The handlers only map its result (or the
//! ping payload check) to a status code and JSON body.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::error;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub environment: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct UnhealthyReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct PongResponse {
    pub pong: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Health check over the shared state.
pub struct HealthCheck<'a> {
    state: &'a AppState,
}

impl<'a> HealthCheck<'a> {
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Build a healthy report stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if `now` cannot be rendered as RFC 3339.
    pub fn execute(&self, now: OffsetDateTime) -> Result<HealthReport, HealthError> {
        Ok(HealthReport {
            status: HealthStatus::Healthy,
            timestamp: format_timestamp(now)?,
            uptime: self.state.uptime().as_secs_f64(),
            environment: self.state.environment.to_string(),
            version: self.state.version.to_owned(),
        })
    }
}

fn format_timestamp(now: OffsetDateTime) -> Result<String, HealthError> {
    Ok(now.format(&Rfc3339)?)
}

/// Body of the 500 response when the health check fails.
#[must_use]
pub fn unhealthy_report(err: &HealthError, now: OffsetDateTime) -> UnhealthyReport {
    UnhealthyReport {
        status: HealthStatus::Unhealthy,
        timestamp: format_timestamp(now).unwrap_or_default(),
        error: err.to_string(),
    }
}

/// Error message for a ping body, or `None` when it carries `"ping": "ping"`.
/// A `null` body has no fields to read and counts as a bad request.
#[must_use]
pub fn ping_error(body: &serde_json::Value) -> Option<&'static str> {
    if body.is_null() {
        return Some("Invalid request");
    }
    if body.get("ping").and_then(serde_json::Value::as_str) == Some("ping") {
        None
    } else {
        Some("Invalid payload")
    }
}

/// `GET /api/health` — report status, uptime, environment and version.
pub async fn health(State(state): State<AppState>) -> Response {
    let now = OffsetDateTime::now_utc();
    match HealthCheck::new(&state).execute(now) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!(error = %e, "health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(unhealthy_report(&e, now))).into_response()
        }
    }
}

/// `POST /api/health` — answer `{"ping":"ping"}` with a timestamped pong.
pub async fn ping(payload: Result<Json<serde_json::Value>, JsonRejection>) -> Response {
    let Ok(Json(body)) = payload else {
        return (StatusCode::BAD_REQUEST, Json(ErrorBody { error: "Invalid request" })).into_response();
    };
    if let Some(error) = ping_error(&body) {
        return (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response();
    }

    match format_timestamp(OffsetDateTime::now_utc()) {
        Ok(timestamp) => (StatusCode::OK, Json(PongResponse { pong: "pong", timestamp })).into_response(),
        Err(e) => {
            error!(error = %e, "ping timestamp failed");
            (StatusCode::BAD_REQUEST, Json(ErrorBody { error: "Invalid request" })).into_response()
        }
    }
}

/// `GET /healthz` — bare liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
