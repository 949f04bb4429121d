//! Structural validation and the size guard.

use crate::core::followup::followup_error::{FieldViolation, FollowupError};

/// Hard cap on `question` + `answer`, counted in characters after trimming.
pub const MAX_INPUT_CHARS: usize = 4000;

/// Minimum length of `question` and `answer`, counted on the raw value.
pub const MIN_FIELD_CHARS: usize = 3;

/// Request that passed structural validation. `question` and `answer` are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowupInput {
    pub question: String,
    pub answer: String,
    pub role: Option<String>,
    pub interview_type: Option<Vec<String>>,
}

impl FollowupInput {
    /// Validates raw fields and trims `question`/`answer`.
    ///
    /// Every failing field is reported, not only the first.
    pub fn validate(
        question: &str,
        answer: &str,
        role: Option<String>,
        interview_type: Option<Vec<String>>,
    ) -> Result<Self, FollowupError> {
        let mut violations = Vec::new();

        let question = check_text("question", question, &mut violations);
        let answer = check_text("answer", answer, &mut violations);

        if !violations.is_empty() {
            return Err(FollowupError::Validation(violations));
        }

        Ok(Self {
            question,
            answer,
            role,
            interview_type,
        })
    }

    /// Combined length of `question` and `answer` in characters.
    pub fn input_chars(&self) -> usize {
        self.question.chars().count() + self.answer.chars().count()
    }

    /// Rejects inputs above `max` characters.
    pub fn ensure_within(&self, max: usize) -> Result<(), FollowupError> {
        let chars = self.input_chars();
        if chars > max {
            return Err(FollowupError::PayloadTooLarge { chars, max });
        }
        Ok(())
    }
}

fn check_text(field: &'static str, raw: &str, violations: &mut Vec<FieldViolation>) -> String {
    let trimmed = raw.trim();
    if raw.chars().count() < MIN_FIELD_CHARS {
        violations.push(FieldViolation::new(
            field,
            format!("Field must be at least {MIN_FIELD_CHARS} characters."),
        ));
    } else if trimmed.is_empty() {
        violations.push(FieldViolation::new(
            field,
            "Field must not be empty or whitespace only.",
        ));
    }
    trimmed.to_string()
}
