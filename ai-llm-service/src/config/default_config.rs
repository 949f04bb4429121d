//! Default LLM config for follow-up generation, loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`      = API key (mandatory)
//! - `OPENAI_MODEL`        = model identifier (optional, defaults to [`DEFAULT_OPENAI_MODEL`])
//! - `OPENAI_BASE_URL`     = API base URL (optional, defaults to [`DEFAULT_OPENAI_BASE_URL`])
//! - `OPENAI_TIMEOUT_SECS` = request timeout in seconds (optional, transport default if unset)
//!
//! Sampling parameters are fixed: follow-ups should stay short and focused.

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, env_opt, env_opt_u64, must_env, validate_http_endpoint},
};

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Endpoint used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Sampling temperature for follow-up generation.
pub const FOLLOWUP_TEMPERATURE: f32 = 0.3;

/// Cap on generated tokens for a single follow-up.
pub const FOLLOWUP_MAX_TOKENS: u32 = 120;

/// Constructs the follow-up generation config strictly from environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`](crate::error_handler::ConfigError::MissingVar) if `OPENAI_API_KEY` is absent or blank
/// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber) if `OPENAI_TIMEOUT_SECS` is not a `u64`
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat) if `OPENAI_BASE_URL` has no http(s) scheme
pub fn config_openai_followup() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = env_opt("OPENAI_MODEL");
    let endpoint = env_opt("OPENAI_BASE_URL");
    let timeout_secs = env_opt_u64("OPENAI_TIMEOUT_SECS")?;

    openai_followup_config(api_key, model, endpoint, timeout_secs)
}

/// Builds the follow-up config from already-resolved values.
///
/// Blank `model`/`endpoint` fall back to the defaults.
pub fn openai_followup_config(
    api_key: String,
    model: Option<String>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<LlmModelConfig, AiLlmError> {
    let model = model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

    let endpoint = endpoint
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: Some(FOLLOWUP_MAX_TOKENS),
        temperature: Some(FOLLOWUP_TEMPERATURE),
        timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::ConfigError;

    #[test]
    fn defaults_apply_when_optional_values_are_missing() {
        let cfg = openai_followup_config("sk-test".into(), None, None, None).unwrap();
        assert_eq!(cfg.provider, LlmProvider::OpenAI);
        assert_eq!(cfg.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(cfg.endpoint, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.temperature, Some(0.3));
        assert_eq!(cfg.max_tokens, Some(120));
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let cfg = openai_followup_config("k".into(), Some("   ".into()), None, None).unwrap();
        assert_eq!(cfg.model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn explicit_model_and_endpoint_are_kept() {
        let cfg = openai_followup_config(
            "k".into(),
            Some("gpt-4o".into()),
            Some("http://localhost:8080".into()),
            Some(15),
        )
        .unwrap();
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.endpoint, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, Some(15));
    }

    #[test]
    fn endpoint_without_scheme_is_rejected() {
        let err = openai_followup_config("k".into(), None, Some("api.openai.com".into()), None)
            .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidFormat {
                var: "OPENAI_BASE_URL",
                ..
            })
        ));
    }
}
