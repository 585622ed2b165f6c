//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Routes with their one-line descriptions, as logged at startup
pub const ROUTES: [(&str, &str, &str); 6] = [
    ("GET", "/", "Landing page"),
    ("GET", "/questions", "Questionnaire definition"),
    ("POST", "/answers", "Submit answers"),
    ("GET", "/submissions", "All stored submissions"),
    ("GET", "/health", "Health check"),
    ("GET", "/static/*", "Static assets"),
];

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin may read every response
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::home_page))
        .route("/questions", get(handlers::get_questions))
        .route("/answers", post(handlers::post_answers))
        .route("/submissions", get(handlers::get_submissions))
        .route("/health", get(handlers::health_check))
        .nest_service("/static", assets)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
