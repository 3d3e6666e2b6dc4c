//! CLI argument definitions for the `krishi` binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use krishi_core::types::{Language, UserRole};

/// SmartKrishi session core: cart, role, language, chat and voice commands.
#[derive(Parser, Debug)]
#[command(name = "krishi", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the session database.
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect or edit the cart.
    #[command(subcommand)]
    Cart(CartCommand),

    /// Show or change the user role.
    #[command(subcommand)]
    Role(RoleCommand),

    /// Show or change the display language.
    #[command(subcommand)]
    Lang(LangCommand),

    /// Send one message to the chat assistant.
    Chat {
        /// Message text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Run one utterance through the voice assistant.
    Voice {
        /// Utterance, as the recognizer would have transcribed it.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// List cart rows and totals.
    Show {
        /// Print the cart as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add one unit of a product.
    Add {
        id: String,
        name: String,
        price: f64,
        /// Seller display name.
        #[arg(long, default_value = "")]
        seller: String,
        /// Product image reference.
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Set the quantity of a row. Zero or less removes it.
    Update {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a row.
    Remove { id: String },
    /// Empty the cart.
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    Show,
    Set {
        #[arg(value_parser = parse_role)]
        role: UserRole,
    },
}

#[derive(Subcommand, Debug)]
pub enum LangCommand {
    Show,
    Set {
        #[arg(value_parser = parse_language)]
        language: Language,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > KRISHI_CONFIG env var > ~/.smartkrishi/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("KRISHI_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Returns `None` if not overridden (use config value).
    pub fn resolve_data_dir(&self) -> Option<String> {
        self.data_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
    }

    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

fn parse_role(value: &str) -> Result<UserRole, String> {
    UserRole::parse(&value.to_lowercase())
        .ok_or_else(|| format!("unknown role '{}', expected farmer or buyer", value))
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(&value.to_lowercase())
        .ok_or_else(|| format!("unknown language '{}', expected en, hi or mr", value))
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".smartkrishi").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".smartkrishi").join("config.toml");
    }
    PathBuf::from("config.toml")
}
