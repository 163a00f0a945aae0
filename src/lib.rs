//! ProPrompter - teleprompter script storage service.
//!
//! A small REST backend that stores teleprompter scripts and their display
//! settings in SQLite or PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod script;
pub mod web;

pub use config::Config;
pub use db::{Backend, Database};
pub use error::{PrompterError, Result};
pub use script::{NewScript, Script, ScriptUpdate};
