//! OpenAI chat-completion client used by the follow-up generator.
//!
//! - [`config`] builds an immutable [`LlmModelConfig`] from the environment.
//! - [`services::chat_generator::ChatGenerator`] is the narrow seam the API
//!   depends on; [`services::open_ai_service::OpenAiService`] implements it.
//! - [`error_handler`] holds the unified [`AiLlmError`].
//! - [`telemetry`] exposes a tracing layer scoped to this crate.

pub mod config {
    pub mod default_config;
    pub mod llm_model_config;
    pub mod llm_provider;
}

pub mod services {
    pub mod chat_generator;
    pub mod open_ai_service;
}

pub mod error_handler;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::AiLlmError;
pub use services::chat_generator::{ChatGenerator, ChatPrompt};
pub use services::open_ai_service::OpenAiService;
