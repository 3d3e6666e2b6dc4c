//! Side-effect port the voice assistant drives.

use std::fmt;

use krishi_core::types::Route;

/// User-facing notices raised by the voice assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A transcript was received and acted on.
    Heard(String),
    /// Speech recognition is not available on this platform.
    Unsupported,
    /// The recognizer reported an error.
    RecognitionError(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Heard(text) => write!(f, "🎙️ \"{}\"", text),
            Notice::Unsupported => write!(f, "Speech recognition not supported on this device"),
            Notice::RecognitionError(_) => write!(f, "Voice recognition error"),
        }
    }
}

/// Navigation, speech output, and notices, supplied by the embedding UI.
pub trait VoiceHost {
    fn navigate(&mut self, route: Route);

    /// Fire-and-forget speech synthesis. Hosts without speech output may
    /// ignore the call.
    fn speak(&mut self, text: &str, locale: &str);

    fn notify(&mut self, notice: Notice);
}
