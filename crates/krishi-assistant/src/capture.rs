//! Speech recognition capability port.
//!
//! The platform recognizer is callback driven (start / result / error /
//! end). It is wrapped here as a channel of [`VoiceEvent`]s so the assistant
//! can be driven without any real capability present.

use tokio::sync::mpsc;

use crate::error::AssistantError;

/// One callback from the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// Capture has begun.
    Start,
    /// Final recognized text.
    Result(String),
    /// Recognition failed.
    Error(String),
    /// Capture has ended.
    End,
}

/// Receiving half of a capture session's events.
pub type VoiceEvents = mpsc::UnboundedReceiver<VoiceEvent>;

/// A platform speech recognizer.
pub trait VoiceCapture {
    /// Begin one capture session with the given locale hint.
    ///
    /// Fails with [`AssistantError::CapabilityUnavailable`] when the platform
    /// has no recognizer.
    fn start(&mut self, locale: &str) -> Result<VoiceEvents, AssistantError>;
}

/// Recognizer for platforms without speech input.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCapture;

impl VoiceCapture for UnavailableCapture {
    fn start(&mut self, _locale: &str) -> Result<VoiceEvents, AssistantError> {
        Err(AssistantError::CapabilityUnavailable(
            "speech recognition is not supported on this platform".to_string(),
        ))
    }
}

/// Recognizer that replays a fixed event sequence on every start.
///
/// Used by the CLI to push typed text through the full voice path, and by tests.
#[derive(Debug, Clone)]
pub struct ScriptedCapture {
    events: Vec<VoiceEvent>,
    started_with: Vec<String>,
}

impl ScriptedCapture {
    pub fn new(events: Vec<VoiceEvent>) -> Self {
        Self {
            events,
            started_with: Vec::new(),
        }
    }

    /// Start, one recognized transcript, end.
    pub fn transcript(text: impl Into<String>) -> Self {
        Self::new(vec![
            VoiceEvent::Start,
            VoiceEvent::Result(text.into()),
            VoiceEvent::End,
        ])
    }

    /// Locale hints passed to each `start` call so far.
    pub fn locales(&self) -> &[String] {
        &self.started_with
    }
}

impl VoiceCapture for ScriptedCapture {
    fn start(&mut self, locale: &str) -> Result<VoiceEvents, AssistantError> {
        self.started_with.push(locale.to_string());
        let (tx, rx) = mpsc::unbounded_channel();
        for event in &self.events {
            tx.send(event.clone())
                .map_err(|e| AssistantError::Capture(e.to_string()))?;
        }
        Ok(rx)
    }
}
