//! Narrow generation seam consumed by the HTTP layer.

use async_trait::async_trait;

use crate::error_handler::AiLlmError;

/// Two-part chat prompt: a fixed system instruction plus the user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Anything that can turn a [`ChatPrompt`] into raw model text.
///
/// Implementations return the text of the first candidate as-is (no
/// trimming); a candidate without content yields `Ok(String::new())`.
/// Callers own normalisation and the empty-output policy.
#[async_trait]
pub trait ChatGenerator: Send + Sync {
    async fn chat(&self, prompt: &ChatPrompt) -> Result<String, AiLlmError>;
}
