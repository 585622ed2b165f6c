//! API Request/Response Types
//!
//! Request bodies and list responses reuse the model types directly
//! (`Vec<Answer>`, `&[Question]`, `Vec<Submission>`); only the envelopes
//! specific to one endpoint live here.

use serde::{Deserialize, Serialize};

use crate::core::ingest::Receipt;
use crate::utils::constants::MSG_ANSWERS_SAVED;

// ============================================
// Answer Submission
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: String,
    pub total_submissions: usize,
}

impl From<Receipt> for SubmitResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            success: true,
            message: MSG_ANSWERS_SAVED.to_string(),
            submission_id: receipt.submission.id,
            total_submissions: receipt.total_submissions,
        }
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_submissions: usize,
}
