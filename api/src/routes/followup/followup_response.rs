use serde::Serialize;

/// Fixed status text of a successful generation.
pub const FOLLOWUP_GENERATED: &str = "Follow-up question generated.";

/// Response payload for /interview/generate-followups.
#[derive(Debug, Serialize)]
pub struct GenerateFollowupsResponse {
    /// Always `"success"`; failures use the error envelope instead.
    pub result: &'static str,
    pub message: &'static str,
    pub data: FollowupData,
}

#[derive(Debug, Serialize)]
pub struct FollowupData {
    pub followup_question: String,
}

impl GenerateFollowupsResponse {
    /// Wraps an already-normalised, non-empty follow-up.
    pub fn success(followup_question: String) -> Self {
        Self {
            result: "success",
            message: FOLLOWUP_GENERATED,
            data: FollowupData { followup_question },
        }
    }
}
