use ai_llm_service::AiLlmError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::core::{
    followup::followup_error::{FieldViolation, FollowupError},
    http::response_envelope::{ApiErrorDetail, ApiErrorResponse},
};

/// Request fields that serde paths are matched against.
const REQUEST_FIELDS: [&str; 4] = ["question", "answer", "role", "interview_type"];

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request handling ---
    #[error(transparent)]
    Followup(#[from] FollowupError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Followup(FollowupError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Followup(
                FollowupError::PayloadTooLarge { .. } | FollowupError::BodyTooLarge,
            ) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Followup(FollowupError::EmptyGeneration | FollowupError::Upstream) => {
                StatusCode::BAD_GATEWAY
            }

            // startup-only
            AppError::InvalidEnv { .. }
            | AppError::Llm(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Followup(FollowupError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Followup(
                FollowupError::PayloadTooLarge { .. } | FollowupError::BodyTooLarge,
            ) => "PAYLOAD_TOO_LARGE",
            AppError::Followup(FollowupError::EmptyGeneration) => "EMPTY_MODEL_OUTPUT",
            AppError::Followup(FollowupError::Upstream) => "UPSTREAM_ERROR",
            AppError::InvalidEnv { .. } | AppError::Llm(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
        }
    }

    /// Caller-facing message. Never includes internal error text.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Followup(FollowupError::Validation(_)) => "Request validation failed.",
            AppError::Followup(
                FollowupError::PayloadTooLarge { .. } | FollowupError::BodyTooLarge,
            ) => "Input too large.",
            AppError::Followup(FollowupError::EmptyGeneration) => "Model returned empty output.",
            AppError::Followup(FollowupError::Upstream) => "An upstream error occurred.",
            _ => "Internal server error.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.public_message();

        let details = match self {
            AppError::Followup(FollowupError::Validation(violations)) => violations
                .into_iter()
                .map(|v| ApiErrorDetail {
                    field: v.field,
                    reason: v.reason,
                })
                .collect(),
            _ => Vec::new(),
        };

        ApiErrorResponse::new(code, message, details).into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Body rejections (malformed JSON, wrong types, missing fields) are
/// structural validation failures; a body over the server size limit is
/// reported as too large.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::Followup(FollowupError::BodyTooLarge);
        }

        let reason = err.body_text();
        let violation = FieldViolation {
            field: field_from_serde_msg(&reason),
            reason,
        };
        AppError::Followup(FollowupError::Validation(vec![violation]))
    }
}

/// Extracts the offending field from a serde/axum rejection message.
fn field_from_serde_msg(msg: &str) -> Option<String> {
    if let Some((_, rest)) = msg.split_once("missing field `") {
        return rest.split('`').next().map(str::to_string);
    }

    let detail = msg.rsplit_once("target type: ").map_or(msg, |(_, d)| d);
    let (path, _) = detail.split_once(": ")?;
    REQUEST_FIELDS
        .iter()
        .any(|f| path == *f || path.strip_prefix(f).is_some_and(|r| r.starts_with('[')))
        .then(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (FollowupError::Validation(vec![]), 422),
            (FollowupError::PayloadTooLarge { chars: 5000, max: 4000 }, 413),
            (FollowupError::BodyTooLarge, 413),
            (FollowupError::EmptyGeneration, 502),
            (FollowupError::Upstream, 502),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code().as_u16(), status);
        }
    }

    #[test]
    fn upstream_messages_are_fixed() {
        assert_eq!(
            AppError::from(FollowupError::EmptyGeneration).public_message(),
            "Model returned empty output."
        );
        assert_eq!(
            AppError::from(FollowupError::Upstream).public_message(),
            "An upstream error occurred."
        );
    }

    #[test]
    fn missing_field_is_extracted() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `answer` at line 1 column 20";
        assert_eq!(field_from_serde_msg(msg).as_deref(), Some("answer"));
    }

    #[test]
    fn typed_path_is_extracted() {
        let msg = "Failed to deserialize the JSON body into the target type: interview_type[1]: invalid type: integer `3`, expected a string at line 1 column 80";
        assert_eq!(field_from_serde_msg(msg).as_deref(), Some("interview_type[1]"));

        let msg = "Failed to deserialize the JSON body into the target type: question: invalid type: integer `5`, expected a string at line 1 column 14";
        assert_eq!(field_from_serde_msg(msg).as_deref(), Some("question"));
    }

    #[test]
    fn unattributable_messages_have_no_field() {
        let msg = "Failed to parse the request body as JSON: expected value at line 1 column 1";
        assert_eq!(field_from_serde_msg(msg), None);
    }
}
