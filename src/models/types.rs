//! Type definitions for the survey service
//! Questions, answers and accepted submissions, in their JSON wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input control a question is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-form text
    Text,
    /// Numeric input
    Number,
    /// One of a fixed set of option labels
    Select,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Number => "number",
            QuestionKind::Select => "select",
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Question {
    /// Free-text question
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::Text,
            options: None,
            required: false,
            placeholder: None,
        }
    }

    /// Numeric question
    pub fn number(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::Number,
            ..Self::text(id, text)
        }
    }

    /// Single-choice question
    pub fn select<I, S>(id: impl Into<String>, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: QuestionKind::Select,
            options: Some(options.into_iter().map(Into::into).collect()),
            ..Self::text(id, text)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Value carried by an answer.
///
/// Only null/empty checks and pass-through storage are ever performed on it,
/// so the set of accepted JSON shapes is closed to scalars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl AnswerValue {
    /// True for null and the empty string. Whitespace, `0` and `false` count as answered.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Null => true,
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Bool(_) | AnswerValue::Number(_) => false,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        AnswerValue::Number(n.into())
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Number(n.into())
    }
}

/// One response to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Not checked against the catalog; a missing key reads as `""`
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    /// True when this answer satisfies a required question with the given id
    pub fn answers(&self, question_id: &str) -> bool {
        self.question_id == question_id && !self.value.is_empty()
    }
}

/// An accepted questionnaire response. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    /// As submitted: not deduplicated, not required to cover the catalog
    pub answers: Vec<Answer>,
    pub timestamp: DateTime<Utc>,
}

impl Submission {
    /// Stamp a fresh id and the current time onto an accepted batch
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            answers,
            timestamp: Utc::now(),
        }
    }

    /// Short description for logs
    pub fn summary(&self) -> String {
        format!(
            "Submission {} | {} answers | {}",
            self.id,
            self.answers.len(),
            self.timestamp.to_rfc3339()
        )
    }
}
