//! POST /interview/generate-followups: one AI follow-up for a Q/A pair.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info, instrument};

use crate::{
    core::{
        app_state::AppState,
        followup::{
            followup_error::FollowupError, followup_invoker::generate_followup,
            followup_prompt::build_prompt,
        },
    },
    error_handler::AppResult,
    routes::followup::{
        followup_request::GenerateFollowupsRequest, followup_response::GenerateFollowupsResponse,
    },
};

/// Handler: POST /interview/generate-followups
///
/// Validate → size guard → build prompt → call model → respond.
/// Validation and size failures return before the model is called.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/interview/generate-followups \
///   -H 'content-type: application/json' \
///   -d '{"question":"Tell me about a time you led a team.","answer":"I led a 5-person team to ship a feature in 3 weeks.","interview_type":["behavioral"]}'
/// ```
#[instrument(name = "generate_followups_route", skip_all)]
pub async fn generate_followups(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateFollowupsRequest>, JsonRejection>,
) -> AppResult<Json<GenerateFollowupsResponse>> {
    let Json(body) = payload.inspect_err(|e| debug!(reason = %e.body_text(), "rejected body"))?;

    let input = body.into_input().inspect_err(|e| {
        if let FollowupError::Validation(v) = e {
            debug!(violations = v.len(), "request failed validation");
        }
    })?;

    input
        .ensure_within(state.max_input_chars)
        .inspect_err(|e| debug!(error = %e, "request over size limit"))?;

    let prompt = build_prompt(&input);
    let followup = generate_followup(state.generator.as_ref(), &prompt).await?;

    info!(followup_len = followup.len(), "follow-up generated");

    Ok(Json(GenerateFollowupsResponse::success(followup)))
}
