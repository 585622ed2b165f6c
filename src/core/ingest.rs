//! Validation & Ingestion
//!
//! Checks an answer batch against the catalog's required questions and, on
//! success, records it as a new submission.
//!
//! Validation is fail-fast: the first required question (in catalog order)
//! without a non-empty answer decides the error.

use tracing::{debug, info, warn};

use super::catalog::QuestionCatalog;
use super::store::SubmissionStore;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Answer, Question, Submission};

/// Outcome of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub submission: Submission,
    /// Store size right after this submission was appended
    pub total_submissions: usize,
}

/// First required question with no usable answer, if any
pub fn first_unanswered<'a>(
    catalog: &'a QuestionCatalog,
    answers: &[Answer],
) -> Option<&'a Question> {
    catalog
        .required()
        .find(|q| !answers.iter().any(|a| a.answers(&q.id)))
}

/// Validate a batch without storing it
pub fn validate(catalog: &QuestionCatalog, answers: &[Answer]) -> AppResult<()> {
    match first_unanswered(catalog, answers) {
        Some(q) => {
            warn!(question_id = %q.id, "Required question not answered");
            Err(AppError::required_missing(&q.text))
        }
        None => Ok(()),
    }
}

/// Catalog plus store: everything a request handler needs
#[derive(Debug, Clone, Default)]
pub struct SurveyService {
    catalog: QuestionCatalog,
    store: SubmissionStore,
}

impl SurveyService {
    pub fn new(catalog: QuestionCatalog, store: SubmissionStore) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn questions(&self) -> &[Question] {
        self.catalog.list()
    }

    /// Validate and, on success, append exactly one record. Identical batches are
    /// stored as separate records.
    pub fn submit(&self, answers: Vec<Answer>) -> AppResult<Receipt> {
        validate(&self.catalog, &answers)?;

        let submission = Submission::new(answers);
        let total_submissions = self.store.append(submission.clone());

        info!(
            submission_id = %submission.id,
            answers = submission.answers.len(),
            total = total_submissions,
            "Submission stored"
        );
        debug!("{}", submission.summary());

        Ok(Receipt {
            submission,
            total_submissions,
        })
    }

    /// Every stored submission, oldest first
    pub fn submissions(&self) -> Vec<Submission> {
        self.store.snapshot()
    }
}
