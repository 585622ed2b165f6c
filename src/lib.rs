//! Survey Form Library
//!
//! Minimal survey collection service:
//! - Fixed questionnaire served as JSON
//! - Answer intake with fail-fast required-question validation
//! - Accepted submissions kept in an in-memory, append-only store

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    first_unanswered, validate, QuestionCatalog, Receipt, SubmissionStore, SurveyService,
};
pub use models::{
    AppError, AppResult, Answer, AnswerValue, ErrorCode, Question, QuestionKind, ServerConfig,
    Submission,
};
