use std::sync::Arc;

pub mod core {
    pub mod app_state;
    pub mod config;
    pub mod followup {
        pub mod followup_error;
        pub mod followup_input;
        pub mod followup_invoker;
        pub mod followup_prompt;
    }
    pub mod http {
        pub mod response_envelope;
    }
}

pub mod error_handler;

pub mod middleware_layer {
    pub mod request_id;
}

pub mod routes {
    pub mod followup {
        pub mod followup_request;
        pub mod followup_response;
        pub mod followup_route;
    }
    pub mod health {
        pub mod health_route;
    }
}

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::{app_state::AppState, config::ApiConfig},
    error_handler::AppError,
    middleware_layer::request_id::request_id,
    routes::{followup::followup_route::generate_followups, health::health_route::healthz},
};

/// Builds the HTTP router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/interview/generate-followups", post(generate_followups))
        .layer(middleware::from_fn(request_id))
        .with_state(Arc::new(state))
}

/// Binds `config.address` and serves until Ctrl+C.
pub async fn start(config: ApiConfig, state: AppState) -> Result<(), AppError> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;

    info!(address = %config.address, "follow-up API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("follow-up API stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
