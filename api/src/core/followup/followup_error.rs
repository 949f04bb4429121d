use thiserror::Error;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field path like `question` or `interview_type[1]`; `None` when the
    /// body could not be attributed to a field (e.g. malformed JSON).
    pub field: Option<String>,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            reason: reason.into(),
        }
    }
}

/// Terminal failure of a single follow-up request.
///
/// The HTTP boundary is the only place these are turned into status codes.
#[derive(Debug, Error)]
pub enum FollowupError {
    #[error("request validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("combined input is {chars} characters, limit is {max}")]
    PayloadTooLarge { chars: usize, max: usize },

    /// Body was cut off by the server's request size limit before it
    /// could be parsed.
    #[error("request body exceeds the server limit")]
    BodyTooLarge,

    #[error("model returned empty output")]
    EmptyGeneration,

    /// Cause is logged where it happens and intentionally not carried.
    #[error("upstream generation failed")]
    Upstream,
}
