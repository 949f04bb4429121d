//! Calls the generator once and normalises its output.

use ai_llm_service::{ChatGenerator, ChatPrompt};
use tracing::{error, warn};

use crate::core::followup::followup_error::FollowupError;

/// Sends `prompt` to `generator` and returns the trimmed follow-up.
///
/// No retries. Blank output is [`FollowupError::EmptyGeneration`]; any
/// generator error is logged and collapsed into [`FollowupError::Upstream`].
pub async fn generate_followup(
    generator: &dyn ChatGenerator,
    prompt: &ChatPrompt,
) -> Result<String, FollowupError> {
    let raw = match generator.chat(prompt).await {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "follow-up generation failed");
            return Err(FollowupError::Upstream);
        }
    };

    let followup = raw.trim();
    if followup.is_empty() {
        warn!(raw_len = raw.len(), "model returned empty output");
        return Err(FollowupError::EmptyGeneration);
    }

    Ok(followup.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_llm_service::{
        AiLlmError,
        error_handler::{Provider, ProviderError, ProviderErrorKind},
    };
    use async_trait::async_trait;

    struct Fixed(Result<&'static str, ()>);

    #[async_trait]
    impl ChatGenerator for Fixed {
        async fn chat(&self, _prompt: &ChatPrompt) -> Result<String, AiLlmError> {
            match self.0 {
                Ok(s) => Ok(s.to_string()),
                Err(()) => Err(ProviderError::new(
                    Provider::OpenAI,
                    ProviderErrorKind::Decode("secret internal detail".into()),
                )
                .into()),
            }
        }
    }

    fn prompt() -> ChatPrompt {
        ChatPrompt {
            system: "s".into(),
            user: "u".into(),
        }
    }

    #[tokio::test]
    async fn output_is_trimmed() {
        let out = generate_followup(&Fixed(Ok("  What changed?\n")), &prompt())
            .await
            .unwrap();
        assert_eq!(out, "What changed?");
    }

    #[tokio::test]
    async fn blank_output_is_empty_generation() {
        for blank in ["", "   ", "\n\t"] {
            let err = generate_followup(&Fixed(Ok(blank)), &prompt())
                .await
                .unwrap_err();
            assert!(matches!(err, FollowupError::EmptyGeneration));
        }
    }

    #[tokio::test]
    async fn generator_error_is_upstream_without_detail() {
        let err = generate_followup(&Fixed(Err(())), &prompt())
            .await
            .unwrap_err();
        assert!(matches!(err, FollowupError::Upstream));
        assert!(!err.to_string().contains("secret"));
    }
}
