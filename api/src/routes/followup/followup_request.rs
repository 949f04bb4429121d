use serde::Deserialize;

use crate::core::followup::{followup_error::FollowupError, followup_input::FollowupInput};

/// Request payload for /interview/generate-followups.
#[derive(Debug, Deserialize)]
pub struct GenerateFollowupsRequest {
    /// Interview question that was asked.
    pub question: String,
    /// Candidate's answer to `question`.
    pub answer: String,
    /// Free-form job role label.
    #[serde(default)]
    pub role: Option<String>,
    /// Interview kinds, e.g. `["technical", "behavioral"]`.
    #[serde(default)]
    pub interview_type: Option<Vec<String>>,
}

impl GenerateFollowupsRequest {
    /// Structural validation; trims `question` and `answer`.
    pub fn into_input(self) -> Result<FollowupInput, FollowupError> {
        FollowupInput::validate(
            &self.question,
            &self.answer,
            self.role,
            self.interview_type,
        )
    }
}
