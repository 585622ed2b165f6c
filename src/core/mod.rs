//! Core Module - Questionnaire, Validation & Storage
//!
//! Everything the HTTP layer calls into. No I/O besides logging.

pub mod catalog;
pub mod ingest;
pub mod store;

pub use catalog::*;
pub use ingest::*;
pub use store::*;
