//! Script module for ProPrompter.
//!
//! This module provides the Script record and its persistence:
//! - Entity and create/update value types
//! - Repository with single-statement CRUD against a session
//! - Service trait that the HTTP layer depends on

mod repository;
mod service;
mod types;

pub use repository::ScriptRepository;
pub use service::{DefaultScriptService, Pagination, ScriptService};
pub use types::{NewScript, Script, ScriptUpdate, DEFAULT_FONT_SIZE, DEFAULT_SPEED, DEFAULT_TITLE};
