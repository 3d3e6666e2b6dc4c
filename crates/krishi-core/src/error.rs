use thiserror::Error;

/// Top-level error type for the SmartKrishi session core.
///
/// Subsystem crates define their own error types and convert them into
/// `KrishiError` with `From`, so that `?` works across crate boundaries. Nothing in
/// the session core is fatal: most callers log these and fall back to a
/// default instead of propagating.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KrishiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for KrishiError {
    fn from(err: toml::de::Error) -> Self {
        KrishiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KrishiError {
    fn from(err: toml::ser::Error) -> Self {
        KrishiError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KrishiError {
    fn from(err: serde_json::Error) -> Self {
        KrishiError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for session core operations.
pub type Result<T> = std::result::Result<T, KrishiError>;
