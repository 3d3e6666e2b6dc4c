//! Voice command table: navigation and language switching.

use krishi_core::types::{Language, Route};

use crate::error::IntentError;
use crate::intent::Intent;
use crate::router::IntentRouter;

/// Build the voice router. Order matters: an utterance mentioning both an
/// order and a language navigates to orders.
pub fn voice_router(fallback_reply: &str) -> Result<IntentRouter, IntentError> {
    let navigate = |target| Intent::Navigate { target };
    let switch = |code| Intent::ChangeLanguage { code };

    let table: [super::Entry<'_>; 8] = [
        ("orders", &["order", "ऑर्डर"], navigate(Route::Orders)),
        (
            "marketplace",
            &["market", "बाज़ार", "बाजार"],
            navigate(Route::Marketplace),
        ),
        ("analytics", &["analytics", "विश्लेषण"], navigate(Route::Analytics)),
        ("community", &["community", "समुदाय"], navigate(Route::Community)),
        ("hindi", &["hindi", "हिंदी"], switch(Language::Hi)),
        ("marathi", &["marathi", "मराठी"], switch(Language::Mr)),
        ("english", &["english", "अंग्रेज"], switch(Language::En)),
        ("home", &["home", "होम", "मुख्य"], navigate(Route::Home)),
    ];
    let rules = super::build(table)?;

    Ok(IntentRouter::new(rules, Intent::reply(fallback_reply)))
}
