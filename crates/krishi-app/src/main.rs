//! SmartKrishi session binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Open the SQLite key/value store
//! 4. Load the session stores and run one command against them

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use krishi_assistant::{ChatSession, Notice, ScriptedCapture, VoiceAssistant, VoiceHost};
use krishi_core::config::KrishiConfig;
use krishi_core::types::{Route, UserRole};
use krishi_intent::Intent;
use krishi_session::{CartCandidate, CartStore, LanguageStore, RoleStore};
use krishi_storage::{KeyValueStore, SqliteStore};

use cli::{CartCommand, CliArgs, Command, LangCommand, RoleCommand};

/// Voice host that writes the assistant's side effects to the terminal.
struct ConsoleHost;

impl VoiceHost for ConsoleHost {
    fn navigate(&mut self, route: Route) {
        println!("-> {}", route.path());
    }

    fn speak(&mut self, text: &str, locale: &str) {
        println!("[{}] {}", locale, text);
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Heard(_) => tracing::info!(notice = %notice, "Voice notice"),
            _ => eprintln!("{}", notice),
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if data_dir.starts_with("~/") || data_dir.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&data_dir[2..])
    } else {
        PathBuf::from(data_dir)
    }
}

/// Line printed after a role change: the role and where the user lands next.
fn role_confirmation(role: UserRole) -> String {
    let landing = role.landing_route();
    format!(
        "Role set to {}. {} ({})",
        role,
        landing.acknowledgement(),
        landing.path()
    )
}

fn run_cart(command: CartCommand, store: Arc<dyn KeyValueStore>) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::load(store);

    match command {
        CartCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(cart.items())?);
                return Ok(());
            }
        }
        CartCommand::Add {
            id,
            name,
            price,
            seller,
            image,
        } => cart.add_item(CartCandidate {
            id,
            name,
            unit_price: price,
            image_ref: image,
            seller_name: seller,
        }),
        CartCommand::Update { id, quantity } => cart.update_quantity(&id, quantity),
        CartCommand::Remove { id } => cart.remove_item(&id),
        CartCommand::Clear => cart.clear(),
    }

    if cart.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }
    for item in cart.items() {
        println!(
            "{:<8} {:<24} {:>4} x {:>8.2} = {:>9.2}  {}",
            item.id,
            item.name,
            item.quantity,
            item.unit_price,
            item.line_total(),
            item.seller_name
        );
    }
    println!(
        "{} item(s), total {:.2}",
        cart.total_items(),
        cart.total_price()
    );
    Ok(())
}

async fn run_voice(
    config: &KrishiConfig,
    text: String,
    store: Arc<dyn KeyValueStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let assistant = VoiceAssistant::from_config(&config.voice)?;
    let mut language = LanguageStore::load(store);
    let mut capture = ScriptedCapture::transcript(text);

    let intent = assistant
        .listen(&mut capture, &mut ConsoleHost, &mut language)
        .await?;
    if let Some(Intent::ChangeLanguage { code }) = intent {
        tracing::info!(language = code.code(), "Display language changed by voice");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists, so a load failure is reported afterwards.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match KrishiConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (KrishiConfig::default(), Some(e)),
    };
    if let Some(dir) = args.resolve_data_dir() {
        config.general.data_dir = dir;
    }
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }

    // Tracing. Logs go to stderr so command output stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    match load_error {
        Some(e) => tracing::debug!(
            path = %config_file.display(),
            error = %e,
            "Config not loaded, using defaults"
        ),
        None => tracing::debug!(path = %config_file.display(), "Configuration loaded"),
    }

    // Storage.
    let data_dir = resolve_data_dir(&config.general.data_dir);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }
    let db_path = data_dir.join(&config.storage.database_file);
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&db_path)?);
    tracing::debug!(path = %db_path.display(), "Session store opened");

    match args.command {
        Command::Cart(command) => run_cart(command, store)?,
        Command::Role(RoleCommand::Show) => {
            let roles = RoleStore::load(store);
            println!("{} (home: {})", roles.role(), roles.landing_route().path());
        }
        Command::Role(RoleCommand::Set { role }) => {
            let mut roles = RoleStore::load(store);
            roles.set_role(role);
            println!("{}", role_confirmation(role));
        }
        Command::Lang(LangCommand::Show) => {
            let language = LanguageStore::load(store).language();
            println!("{} ({})", language.label(), language.code());
        }
        Command::Lang(LangCommand::Set { language }) => {
            LanguageStore::load(store).set_language(language);
            println!("{}", language.switch_confirmation());
        }
        Command::Chat { text } => {
            let mut chat = ChatSession::from_config(&config.chat)?;
            let input = text.join(" ");
            if let Some(reply) = chat.send(&input).await {
                println!("{}", reply.text);
            }
        }
        Command::Voice { text } => run_voice(&config, text.join(" "), store).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_absolute() {
        assert_eq!(resolve_data_dir("/var/lib/krishi"), PathBuf::from("/var/lib/krishi"));
    }

    #[test]
    fn test_role_confirmation_announces_landing_route() {
        assert_eq!(
            role_confirmation(UserRole::Farmer),
            "Role set to farmer. Opening your dashboard (/dashboard)"
        );
        assert_eq!(
            role_confirmation(UserRole::Buyer),
            "Role set to buyer. Opening marketplace (/marketplace)"
        );
    }

    #[test]
    fn test_resolve_data_dir_expands_home() {
        let resolved = resolve_data_dir("~/.smartkrishi/data");
        assert!(resolved.ends_with(".smartkrishi/data"));
        assert!(!resolved.to_string_lossy().starts_with('~'));
    }
}
