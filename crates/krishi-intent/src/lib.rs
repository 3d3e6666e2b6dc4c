//! Rule-based intent routing shared by the chat and voice assistants.
//!
//! An [`IntentRouter`] maps a free-text utterance to exactly one [`Intent`]
//! by walking an ordered rule table; the first rule whose pattern matches
//! the lower-cased utterance wins, otherwise a fixed fallback reply is
//! returned. The router has no side effects. Callers carry out navigation,
//! speech, or message appends themselves.

pub mod error;
pub mod intent;
pub mod router;
pub mod rule;
pub mod rules;

pub use error::IntentError;
pub use intent::Intent;
pub use router::IntentRouter;
pub use rule::Rule;
pub use rules::chat::chat_router;
pub use rules::voice::voice_router;
