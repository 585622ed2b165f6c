//! Constants Module - Single Source of Truth
//!
//! Defaults, environment variable names and user-facing strings used
//! across the service. No hardcoded values in other modules.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "SurveyForm";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_TITLE: &str = "Survey";

/// Landing page template, relative to the templates directory
pub const INDEX_TEMPLATE: &str = "index.html";

/// Placeholder replaced with the survey title when rendering the landing page
pub const TITLE_PLACEHOLDER: &str = "{{title}}";

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

pub const ENV_HOST: &str = "SURVEY_HOST";
/// Platform-provided port, checked before [`ENV_SURVEY_PORT`]
pub const ENV_PORT: &str = "PORT";
pub const ENV_SURVEY_PORT: &str = "SURVEY_PORT";
pub const ENV_STATIC_DIR: &str = "SURVEY_STATIC_DIR";
pub const ENV_TEMPLATES_DIR: &str = "SURVEY_TEMPLATES_DIR";
pub const ENV_TITLE: &str = "SURVEY_TITLE";

// ============================================
// MESSAGES
// ============================================

/// Returned with every accepted submission
pub const MSG_ANSWERS_SAVED: &str = "Answers saved";

// ============================================
// DEFAULT QUESTIONNAIRE
// ============================================

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Prefer not to say"];
