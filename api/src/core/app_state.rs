use std::sync::Arc;

use ai_llm_service::ChatGenerator;

/// Shared state for all HTTP handlers.
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// Remote generation backend (OpenAI in production, fakes in tests).
    pub generator: Arc<dyn ChatGenerator>,
    /// Upper bound on `question` + `answer` characters.
    pub max_input_chars: usize,
}

impl AppState {
    /// State with the default input limit.
    pub fn new(generator: Arc<dyn ChatGenerator>) -> Self {
        Self {
            generator,
            max_input_chars: crate::core::followup::followup_input::MAX_INPUT_CHARS,
        }
    }
}
