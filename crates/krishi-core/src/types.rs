use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// The active user role for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Produce seller.
    Farmer,
    /// Produce buyer (default).
    #[default]
    Buyer,
}

impl UserRole {
    /// Persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Buyer => "buyer",
        }
    }

    /// Parse a persisted value. Anything other than an exact role name is
    /// treated as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "farmer" => Some(UserRole::Farmer),
            "buyer" => Some(UserRole::Buyer),
            _ => None,
        }
    }

    /// Where the user lands after signing in with this role.
    pub fn landing_route(&self) -> Route {
        match self {
            UserRole::Farmer => Route::Dashboard,
            UserRole::Buyer => Route::Marketplace,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display language of the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    /// ISO 639-1 code, also the persisted representation.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Label shown in the language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
        }
    }

    /// Locale hint handed to speech recognition and synthesis.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
            Language::Mr => "mr-IN",
        }
    }

    /// Confirmation spoken after switching to this language, in the language itself.
    pub fn switch_confirmation(&self) -> &'static str {
        match self {
            Language::En => "Language switched to English",
            Language::Hi => "भाषा हिंदी में बदल दी गई",
            Language::Mr => "भाषा मराठीमध्ये बदलली",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Opaque route identifiers handed to the navigation collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Marketplace,
    Community,
    Analytics,
    Orders,
    Login,
    SelectRole,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Marketplace => "/marketplace",
            Route::Community => "/community",
            Route::Analytics => "/analytics",
            Route::Orders => "/orders",
            Route::Login => "/login",
            Route::SelectRole => "/select-role",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Short acknowledgement announced when this route is opened.
    ///
    /// The voice table only navigates to the first five routes. `Dashboard`
    /// and `Marketplace` are also announced as landing routes after a role
    /// is chosen. `Login` and `SelectRole` are reached only through the UI.
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            Route::Home => "Going home",
            Route::Marketplace => "Opening marketplace",
            Route::Community => "Opening community",
            Route::Analytics => "Opening analytics",
            Route::Orders => "Showing your orders",
            Route::Login => "Opening sign in",
            Route::SelectRole => "Opening role selection",
            Route::Dashboard => "Opening your dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// Tests
// =============================================================================
