//! Chat and voice assistants for the SmartKrishi client.
//!
//! Both assistants resolve utterances through a [`krishi_intent::IntentRouter`]
//! and differ only in their rule tables and in how they carry out the
//! resulting intent: the chat session appends a reply to its message list,
//! the voice assistant navigates, switches language, and speaks through a
//! [`VoiceHost`].

pub mod capture;
pub mod chat;
pub mod error;
pub mod host;
pub mod state;
pub mod voice;

pub use capture::{ScriptedCapture, UnavailableCapture, VoiceCapture, VoiceEvent, VoiceEvents};
pub use chat::{Author, ChatMessage, ChatSession};
pub use error::AssistantError;
pub use host::{Notice, VoiceHost};
pub use state::{ListeningGuard, ListeningState, VoiceState};
pub use voice::VoiceAssistant;
