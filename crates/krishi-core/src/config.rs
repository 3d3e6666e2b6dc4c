use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the SmartKrishi session core.
///
/// Loaded from `~/.smartkrishi/config.toml` by default. Every section falls
/// back to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KrishiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl KrishiConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KrishiConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the session database.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.smartkrishi/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Key/value persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file name, relative to `general.data_dir`.
    pub database_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_file: "session.db".to_string(),
        }
    }
}

/// Text chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Cosmetic delay before the simulated reply is appended.
    pub reply_delay_ms: u64,
    /// First bot message of every chat session.
    pub greeting: String,
    #[serde(default)]
    pub replies: ChatReplies,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            greeting: "Namaste! I am the SmartKrishi assistant. Ask me about prices, delivery, payments, selling, schemes or support.".to_string(),
            replies: ChatReplies::default(),
        }
    }
}

/// Canned chat replies, one per topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatReplies {
    pub pricing: String,
    pub delivery: String,
    pub payment: String,
    pub selling: String,
    pub schemes: String,
    pub support: String,
    pub fallback: String,
}

impl Default for ChatReplies {
    fn default() -> Self {
        Self {
            pricing: "Prices are set by farmers and updated daily from mandi rates. Check the marketplace for today's prices.".to_string(),
            delivery: "Orders are dispatched by the farmer within 24 hours and usually arrive in 2-3 days.".to_string(),
            payment: "We accept UPI, cards and net banking through Razorpay. Payment is released to the farmer after delivery.".to_string(),
            selling: "Farmers can list produce from the dashboard: add a product with its price, quantity and photo.".to_string(),
            schemes: "Government schemes such as PM-KISAN are discussed in the community section.".to_string(),
            support: "Our support team is available 9am-6pm. Write to support@smartkrishi.in for help.".to_string(),
            fallback: "Sorry, I can help with prices, delivery, payments, selling, schemes and support.".to_string(),
        }
    }
}

/// Voice assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether the voice assistant is offered at all.
    pub enabled: bool,
    /// Spoken when no voice rule matches.
    pub fallback_reply: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fallback_reply: "Sorry, I did not understand. Please try again.".to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KrishiError;
    use std::io::Write;

    fn create_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default_values() {
        let config = KrishiConfig::default();

        assert_eq!(config.general.data_dir, "~/.smartkrishi/data");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.storage.database_file, "session.db");
        assert_eq!(config.chat.reply_delay_ms, 500);
        assert!(config.chat.greeting.contains("SmartKrishi"));
        assert!(config.voice.enabled);
        assert_eq!(
            config.voice.fallback_reply,
            "Sorry, I did not understand. Please try again."
        );
    }

    #[test]
    fn test_config_load_partial_file() {
        let content = r#"
[general]
log_level = "debug"

[chat]
reply_delay_ms = 0

[chat.replies]
pricing = "Tomatoes are 40 per kg today."
"#;
        let file = create_temp_config(content);
        let config = KrishiConfig::load(file.path()).unwrap();

        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.data_dir, "~/.smartkrishi/data");
        assert_eq!(config.chat.reply_delay_ms, 0);
        assert_eq!(config.chat.replies.pricing, "Tomatoes are 40 per kg today.");
        assert_eq!(
            config.chat.replies.delivery,
            ChatReplies::default().delivery
        );
        assert!(config.voice.enabled);
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = KrishiConfig::load(file.path()).unwrap();
        assert_eq!(config.storage.database_file, "session.db");
        assert_eq!(config.chat.reply_delay_ms, 500);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = KrishiConfig::load(file.path());
        assert!(matches!(result, Err(KrishiError::Config(_))));
    }

    #[test]
    fn test_config_load_or_default_missing_file() {
        let config = KrishiConfig::load_or_default(Path::new("/does/not/exist/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.reply_delay_ms, 500);
    }

    #[test]
    fn test_config_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = KrishiConfig::default();
        config.voice.enabled = false;
        config.save(&path).unwrap();

        let reloaded = KrishiConfig::load(&path).unwrap();
        assert!(!reloaded.voice.enabled);
        assert_eq!(reloaded.chat.replies.support, config.chat.replies.support);
    }
}
