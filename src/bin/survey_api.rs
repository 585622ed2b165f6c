//! Survey API Server
//!
//! Serves the questionnaire, accepts answers and exposes stored submissions.
//!
//! Usage:
//!   cargo run --bin survey_api
//!
//! Environment:
//!   PORT / SURVEY_PORT   - Server port (default: 8080)
//!   SURVEY_HOST          - Server host (default: 0.0.0.0)
//!   SURVEY_STATIC_DIR    - Static assets directory (default: static)
//!   SURVEY_TEMPLATES_DIR - Landing page template directory (default: templates)
//!   SURVEY_TITLE         - Landing page title (default: Survey)
//!   RUST_LOG             - Log level (default: info)

use std::sync::Arc;
use survey_form::api::{create_router, AppState, ROUTES};
use survey_form::utils::constants::{APP_NAME, APP_VERSION};
use survey_form::{QuestionCatalog, ServerConfig, SubmissionStore, SurveyService};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let survey = SurveyService::new(QuestionCatalog::default(), SubmissionStore::new());
    info!(questions = survey.catalog().len(), "Questionnaire loaded");

    let state = Arc::new(AppState::new(config, survey));
    let app = create_router(state.clone());

    let listener = TcpListener::bind(addr).await?;

    info!("{} v{} listening on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    for (method, path, description) in ROUTES {
        info!("  {:<5} {:<14} - {}", method, path, description);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(
        submissions = state.survey.store().len(),
        "Shutdown complete, in-memory submissions discarded"
    );

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to install Ctrl+C handler, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
