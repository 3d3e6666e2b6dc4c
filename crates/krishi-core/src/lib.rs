//! Shared types, configuration, and errors for the SmartKrishi session core.

pub mod config;
pub mod error;
pub mod types;

pub use config::KrishiConfig;
pub use error::{KrishiError, Result};
pub use types::{Language, Route, UserRole};
