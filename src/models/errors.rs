//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be grepped in logs
//! and mapped to an HTTP status in one place.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - API_xxx: request/response errors
//! - VALIDATION_xxx: answer batch rejected
//! - CATALOG_xxx: invalid questionnaire definition
//! - TEMPLATE_xxx: landing page rendering
//! - CFG_xxx: configuration errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message, sent to the client verbatim
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // API Errors
    // ============================================
    /// Request body could not be decoded
    ApiBadRequest,
    /// Response body could not be encoded
    ApiSerializationFailed,

    // ============================================
    // Validation Errors
    // ============================================
    /// A required question has no non-empty answer
    ValidationRequiredMissing,

    // ============================================
    // Catalog Errors
    // ============================================
    /// Two questions share an identifier
    CatalogDuplicateId,
    /// Question definition is internally inconsistent
    CatalogInvalidQuestion,

    // ============================================
    // Template Errors
    // ============================================
    /// Landing page template could not be read
    TemplateReadFailed,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiSerializationFailed => "API_SERIALIZATION_FAILED",

            Self::ValidationRequiredMissing => "VALIDATION_REQUIRED_MISSING",

            Self::CatalogDuplicateId => "CATALOG_DUPLICATE_ID",
            Self::CatalogInvalidQuestion => "CATALOG_INVALID_QUESTION",

            Self::TemplateReadFailed => "TEMPLATE_READ_FAILED",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ValidationRequiredMissing => 400,
            _ => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Malformed request body; keeps the parser's message
    pub fn bad_request(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ApiBadRequest, err.to_string(), err)
    }

    /// Required question left unanswered
    pub fn required_missing(question_text: &str) -> Self {
        Self::new(
            ErrorCode::ValidationRequiredMissing,
            format!("Required question not answered: {}", question_text),
        )
    }

    /// Response encoding failed
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ApiSerializationFailed, err.to_string(), err)
    }

    /// Duplicate question id in a catalog
    pub fn duplicate_question(id: &str) -> Self {
        Self::new(
            ErrorCode::CatalogDuplicateId,
            format!("Duplicate question id: {}", id),
        )
    }

    /// Question definition rejected by the catalog
    pub fn invalid_question(id: &str, reason: &str) -> Self {
        Self::new(
            ErrorCode::CatalogInvalidQuestion,
            format!("Invalid question '{}': {}", id, reason),
        )
    }

    /// Template file unreadable
    pub fn template_read(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::TemplateReadFailed, err.to_string(), err)
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// HTTP mapping
// ============================================

/// Errors are terminal for the request and reach the caller unredacted, as plain text
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.message).into_response()
    }
}
