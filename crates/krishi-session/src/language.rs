//! Active display language, persisted across reloads.

use std::sync::Arc;

use tracing::{debug, warn};

use krishi_core::types::Language;
use krishi_storage::KeyValueStore;

use crate::keys::LANGUAGE_KEY;

pub struct LanguageStore {
    language: Language,
    store: Arc<dyn KeyValueStore>,
}

impl LanguageStore {
    /// Read the persisted language code once, falling back to English.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
                warn!(code = %code, "Unsupported persisted language, using English");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted language, using English");
                Language::default()
            }
        };
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(from = %self.language, to = %language, "Language changed");
        self.language = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!(error = %e, "Failed to persist language; keeping in-memory state");
        }
    }

    /// Locale hint for speech capture and synthesis.
    pub fn speech_locale(&self) -> &'static str {
        self.language.speech_locale()
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
