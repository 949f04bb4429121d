use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Always `"error"`; successful bodies carry `"success"`.
    pub result: &'static str,
    /// Stable, machine-readable error code (e.g. "VALIDATION_ERROR").
    pub code: &'static str,
    /// Human-friendly error message.
    pub message: String,
    /// Optional per-field details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Field path like `question` or `interview_type[0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Why the field was rejected.
    pub reason: String,
}

impl ApiErrorResponse {
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        details: Vec<ApiErrorDetail>,
    ) -> Self {
        Self {
            result: "error",
            code,
            message: message.into(),
            details,
        }
    }

    /// Convert to axum Response.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
