//! Voice assistant driver.
//!
//! Starts a capture in the active display language, forwards each
//! recognized transcript to the voice rule table, and carries out the
//! resulting intent through a [`VoiceHost`].

use tracing::{debug, info, warn};

use krishi_core::config::VoiceConfig;
use krishi_intent::{voice_router, Intent, IntentRouter};
use krishi_session::LanguageStore;

use crate::capture::{VoiceCapture, VoiceEvent};
use crate::error::AssistantError;
use crate::host::{Notice, VoiceHost};
use crate::state::ListeningState;

pub struct VoiceAssistant {
    router: IntentRouter,
    state: ListeningState,
}

impl VoiceAssistant {
    pub fn new(router: IntentRouter) -> Self {
        Self {
            router,
            state: ListeningState::new(),
        }
    }

    /// Build the assistant with the shipped voice rule table.
    pub fn from_config(config: &VoiceConfig) -> Result<Self, AssistantError> {
        if !config.enabled {
            return Err(AssistantError::Disabled);
        }
        Ok(Self::new(voice_router(&config.fallback_reply)?))
    }

    /// Handle for the UI's listening indicator.
    pub fn state(&self) -> ListeningState {
        self.state.clone()
    }

    pub fn is_listening(&self) -> bool {
        self.state.is_listening()
    }

    /// Run one capture session to completion.
    ///
    /// Returns the intent of the last transcript handled, if any. A missing
    /// recognizer is reported to the host as a notice and returned as an
    /// error; recognizer errors end the session with a notice and `Ok(None)`.
    /// Dropping the returned future before it completes also ends the session.
    pub async fn listen<C, H>(
        &self,
        capture: &mut C,
        host: &mut H,
        language: &mut LanguageStore,
    ) -> Result<Option<Intent>, AssistantError>
    where
        C: VoiceCapture + ?Sized,
        H: VoiceHost + ?Sized,
    {
        let _listening = self.state.enter()?;

        let mut events = match capture.start(language.speech_locale()) {
            Ok(events) => events,
            Err(e) => {
                if matches!(e, AssistantError::CapabilityUnavailable(_)) {
                    warn!(error = %e, "Voice capture unavailable");
                    host.notify(Notice::Unsupported);
                }
                return Err(e);
            }
        };
        info!(locale = language.speech_locale(), "Voice capture started");

        let mut last = None;
        while let Some(event) = events.recv().await {
            match event {
                VoiceEvent::Start => debug!("Recognizer reported start"),
                VoiceEvent::Result(text) => {
                    last = Some(self.handle_transcript(&text, host, language));
                }
                VoiceEvent::Error(reason) => {
                    warn!(reason = %reason, "Voice recognition error");
                    host.notify(Notice::RecognitionError(reason));
                    break;
                }
                VoiceEvent::End => break,
            }
        }

        debug!("Voice capture finished");
        Ok(last)
    }

    /// Resolve a transcript and carry out the intent.
    ///
    /// The acknowledgement is spoken in the locale in effect after the
    /// intent, so a language switch is confirmed in the new language.
    pub fn handle_transcript<H>(&self, text: &str, host: &mut H, language: &mut LanguageStore) -> Intent
    where
        H: VoiceHost + ?Sized,
    {
        let intent = self.router.resolve(text);
        match &intent {
            Intent::Navigate { target } => host.navigate(*target),
            Intent::ChangeLanguage { code } => language.set_language(*code),
            Intent::Reply { .. } => {}
        }
        host.speak(intent.acknowledgement(), language.speech_locale());
        host.notify(Notice::Heard(text.to_string()));
        intent
    }
}

impl std::fmt::Debug for VoiceAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceAssistant")
            .field("rules", &self.router.rule_names())
            .field("state", &self.state.current())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
