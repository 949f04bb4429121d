use std::{error::Error, sync::Arc};

use ai_llm_service::{OpenAiService, config::default_config::config_openai_followup, telemetry};
use api::core::{app_state::AppState, config::ApiConfig};
use tracing::{Level, debug, info};
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file if present; the process
    // environment alone is enough.
    let dotenv = dotenvy::dotenv();

    let app_logs = fmt::layer()
        .with_target(false)
        .with_filter(filter::filter_fn(|meta| {
            !telemetry::is_library_target(meta.target())
        }));

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::INFO))
        .with(app_logs)
        .with(telemetry::layer())
        .try_init()?;

    if let Err(e) = dotenv {
        debug!(error = %e, "no .env file loaded");
    }

    // Missing OPENAI_API_KEY stops the process here.
    let llm_config = config_openai_followup()?;
    let generator = OpenAiService::new(llm_config)?;
    info!(model = %generator.model(), "generation backend ready");

    let api_config = ApiConfig::from_env()?;
    let state = AppState::new(Arc::new(generator));

    api::start(api_config, state).await?;

    Ok(())
}
