//! API Request Handlers
//!
//! Thin translation between HTTP and the survey core: decode, call,
//! encode. All failures surface through [`AppError`]'s response mapping.

use axum::{
    body::Bytes,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use super::types::{HealthData, SubmitResponse};
use crate::core::ingest::SurveyService;
use crate::models::config::ServerConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::Answer;
use crate::utils::constants::{APP_VERSION, INDEX_TEMPLATE, TITLE_PLACEHOLDER};

/// Shared application state
pub struct AppState {
    pub survey: SurveyService,
    pub config: ServerConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, survey: SurveyService) -> Self {
        Self {
            survey,
            config,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Encode a body as JSON; an encoding failure becomes a 500 with the encoder's message
fn json_response<T: Serialize + ?Sized>(value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value).map_err(AppError::serialization)?;
    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

// ============================================
// Questionnaire
// ============================================

pub async fn get_questions(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    json_response(state.survey.questions())
}

// ============================================
// Answer Submission
// ============================================

/// Body is parsed by hand so every decode failure is a 400 carrying the parser's
/// message, whatever the request's content type.
pub async fn post_answers(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    let answers: Vec<Answer> = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed answer batch");
        AppError::bad_request(e)
    })?;

    let receipt = state.survey.submit(answers)?;

    json_response(&SubmitResponse::from(receipt))
}

// ============================================
// Stored Submissions
// ============================================

pub async fn get_submissions(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    json_response(&state.survey.submissions())
}

// ============================================
// Landing Page
// ============================================

pub async fn home_page(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let path = state.config.templates_dir.join(INDEX_TEMPLATE);
    let template = tokio::fs::read_to_string(&path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Landing page template unavailable");
        AppError::template_read(e)
    })?;

    Ok(Html(template.replace(TITLE_PLACEHOLDER, &state.config.title)))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        total_submissions: state.survey.store().len(),
    };

    json_response(&data)
}
