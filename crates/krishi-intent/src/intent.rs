use serde::Serialize;

use krishi_core::types::{Language, Route};

/// The action an utterance resolves to.
///
/// Produced only by [`crate::IntentRouter::resolve`]. The caller decides how
/// to carry it out: the voice assistant navigates and speaks, the chat
/// session appends a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    Navigate { target: Route },
    ChangeLanguage { code: Language },
    Reply { text: String },
}

impl Intent {
    pub fn reply(text: impl Into<String>) -> Self {
        Intent::Reply { text: text.into() }
    }

    /// Text announced to the user once the intent has been carried out.
    ///
    /// Language switches are confirmed in the target language.
    pub fn acknowledgement(&self) -> &str {
        match self {
            Intent::Navigate { target } => target.acknowledgement(),
            Intent::ChangeLanguage { code } => code.switch_confirmation(),
            Intent::Reply { text } => text,
        }
    }
}
