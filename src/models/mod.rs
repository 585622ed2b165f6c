//! Models Module - Data Structures & Configuration
//!
//! Wire types, the error taxonomy and server configuration.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
