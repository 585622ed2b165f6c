//! Question Catalog
//!
//! Ordered, immutable list of questions fixed at process start.
//! Checked once on construction; read-only afterwards, so it is shared
//! between requests without any locking.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Question, QuestionKind};
use crate::utils::constants::GENDER_OPTIONS;

#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Arc<[Question]>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting empty or duplicate ids and inconsistent options
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(questions.len());

        for q in &questions {
            if q.id.is_empty() {
                return Err(AppError::invalid_question(&q.id, "empty id"));
            }
            if !seen.insert(q.id.as_str()) {
                return Err(AppError::duplicate_question(&q.id));
            }
            match (q.kind, &q.options) {
                (QuestionKind::Select, Some(opts)) if !opts.is_empty() => {}
                (QuestionKind::Select, _) => {
                    return Err(AppError::invalid_question(&q.id, "select without options"));
                }
                (_, Some(_)) => {
                    return Err(AppError::invalid_question(
                        &q.id,
                        "options are only allowed on select questions",
                    ));
                }
                (_, None) => {}
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Same sequence on every call
    pub fn list(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Required questions, in catalog order
    pub fn required(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.required)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    /// The built-in questionnaire
    fn default() -> Self {
        let questions: Arc<[Question]> = vec![
            Question::text("name", "What is your name?")
                .required()
                .with_placeholder("Enter your name"),
            Question::text("email", "Your email")
                .required()
                .with_placeholder("example@domain.com"),
            Question::number("age", "Your age"),
            Question::select("gender", "Your gender", GENDER_OPTIONS).required(),
            Question::text("feedback", "Leave your feedback")
                .with_placeholder("Write your suggestions..."),
        ]
        .into();

        Self { questions }
    }
}
