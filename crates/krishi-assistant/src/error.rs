//! Error types for the chat and voice assistants.

use krishi_core::error::KrishiError;
use krishi_intent::IntentError;

/// Errors from the assistants. None of these are fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(String),
    #[error("voice capture is already active")]
    AlreadyListening,
    #[error("voice capture failed: {0}")]
    Capture(String),
    #[error("voice assistant is disabled")]
    Disabled,
    #[error("rule table error: {0}")]
    Rules(#[from] IntentError),
}

impl From<AssistantError> for KrishiError {
    fn from(err: AssistantError) -> Self {
        KrishiError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_error_display() {
        let err = AssistantError::CapabilityUnavailable("speech recognition".to_string());
        assert_eq!(err.to_string(), "capability unavailable: speech recognition");

        let err = AssistantError::AlreadyListening;
        assert_eq!(err.to_string(), "voice capture is already active");

        let err = AssistantError::Capture("microphone denied".to_string());
        assert_eq!(err.to_string(), "voice capture failed: microphone denied");

        assert_eq!(
            AssistantError::Disabled.to_string(),
            "voice assistant is disabled"
        );
    }

    #[test]
    fn test_from_intent_error() {
        let err: AssistantError = IntentError::EmptyRule("home".to_string()).into();
        assert!(matches!(err, AssistantError::Rules(_)));
        assert!(err.to_string().contains("home"));
    }
}
