//! Survey HTTP API Module
//! JSON endpoints over the questionnaire, answer intake and submission store

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::{create_router, ROUTES};
pub use types::*;
