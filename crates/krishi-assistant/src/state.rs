//! Listening state shared between the voice assistant and the UI.
//!
//! - Idle -> Listening (capture started)
//! - Listening -> Idle (result delivered and capture ended, error, or stream closed)

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::AssistantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceState {
    /// Ready to start a capture.
    Idle,
    /// A capture session is in progress; the trigger should be disabled.
    Listening,
}

impl fmt::Display for VoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Listening => write!(f, "Listening"),
        }
    }
}

/// Cloneable handle to the current [`VoiceState`].
///
/// The UI keeps a clone to render the "listening" indicator while the
/// assistant drives the capture.
#[derive(Debug, Clone)]
pub struct ListeningState {
    state: Arc<Mutex<VoiceState>>,
}

impl Default for ListeningState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListeningState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(VoiceState::Idle)),
        }
    }

    pub fn current(&self) -> VoiceState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_listening(&self) -> bool {
        self.current() == VoiceState::Listening
    }

    /// Move to `Listening`, refusing if a capture is already running.
    pub fn begin(&self) -> Result<(), AssistantError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == VoiceState::Listening {
            return Err(AssistantError::AlreadyListening);
        }
        tracing::debug!("Voice state: {} -> {}", *state, VoiceState::Listening);
        *state = VoiceState::Listening;
        Ok(())
    }

    /// Like [`ListeningState::begin`], but returns a guard that moves back to
    /// `Idle` when dropped, including when the owning future is cancelled.
    pub fn enter(&self) -> Result<ListeningGuard, AssistantError> {
        self.begin()?;
        Ok(ListeningGuard {
            state: self.clone(),
        })
    }

    /// Return to `Idle`. Idempotent.
    pub fn finish(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != VoiceState::Idle {
            tracing::debug!("Voice state: {} -> {}", *state, VoiceState::Idle);
            *state = VoiceState::Idle;
        }
    }
}

/// Holds a [`ListeningState`] in `Listening` until dropped.
#[derive(Debug)]
#[must_use = "dropping the guard ends the listening session"]
pub struct ListeningGuard {
    state: ListeningState,
}

impl Drop for ListeningGuard {
    fn drop(&mut self) {
        self.state.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = ListeningState::new();
        assert_eq!(state.current(), VoiceState::Idle);
        assert!(!state.is_listening());
    }

    #[test]
    fn test_begin_and_finish() {
        let state = ListeningState::new();
        state.begin().unwrap();
        assert!(state.is_listening());
        state.finish();
        assert_eq!(state.current(), VoiceState::Idle);
        state.finish();
        assert_eq!(state.current(), VoiceState::Idle);
    }

    #[test]
    fn test_double_begin_rejected() {
        let state = ListeningState::new();
        state.begin().unwrap();
        let err = state.begin().unwrap_err();
        assert!(matches!(err, AssistantError::AlreadyListening));
        assert!(state.is_listening());
    }

    #[test]
    fn test_clones_share_state() {
        let state = ListeningState::new();
        let ui = state.clone();
        state.begin().unwrap();
        assert!(ui.is_listening());
    }

    #[test]
    fn test_guard_returns_to_idle_on_drop() {
        let state = ListeningState::new();
        let guard = state.enter().unwrap();
        assert!(state.is_listening());
        assert!(matches!(state.enter(), Err(AssistantError::AlreadyListening)));

        drop(guard);
        assert_eq!(state.current(), VoiceState::Idle);
        let _again = state.enter().unwrap();
        assert!(state.is_listening());
    }

    #[test]
    fn test_display() {
        assert_eq!(VoiceState::Idle.to_string(), "Idle");
        assert_eq!(VoiceState::Listening.to_string(), "Listening");
    }
}
