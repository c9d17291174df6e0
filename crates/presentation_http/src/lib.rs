//! HTTP presentation layer
//!
//! Axum router, handlers and error mapping for the Hearth API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
