//! Error types for rule table construction.

use krishi_core::error::KrishiError;

/// Errors raised while building a rule table. Resolution itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    #[error("Rule '{0}' has no keywords")]
    EmptyRule(String),
}

impl From<IntentError> for KrishiError {
    fn from(err: IntentError) -> Self {
        KrishiError::Config(err.to_string())
    }
}
