//! Web API module for ProPrompter.
//!
//! REST endpoints for teleprompter scripts, plus a greeting, a liveness
//! probe and the OpenAPI document.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
