/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// Only the OpenAI chat-completion API is wired today. Adding another
/// provider means extending this enum and adding a matching
/// [`ChatGenerator`](crate::services::chat_generator::ChatGenerator) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI's chat-completion API (or any wire-compatible endpoint).
    OpenAI,
}
