//! Command-line configuration.

use crate::gateway::gemini::DEFAULT_MODEL;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Base that share links are built on; pasting one back into the app imports it.
pub const DEFAULT_SHARE_BASE: &str = "babushka://import";

#[derive(Parser, Debug, Clone)]
#[command(name = "babushka", about = "Russian vocabulary flashcards")]
pub struct Cli {
    /// SQLite file that holds your custom units.
    #[arg(long, default_value = "babushka.sqlite3")]
    pub db: PathBuf,

    /// Share link (or bare payload) to import on start-up.
    #[arg(long)]
    pub deck: Option<String>,

    /// Gemini API key. Falls back to GEMINI_API_KEY, then API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL for generated share links.
    #[arg(long, default_value = DEFAULT_SHARE_BASE, value_parser = Url::parse)]
    pub share_base: Url,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub startup_link: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub share_base: Url,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = cli
            .api_key
            .or_else(|| env("GEMINI_API_KEY"))
            .or_else(|| env("API_KEY"))
            .filter(|key| !key.trim().is_empty());

        Self {
            db_path: cli.db,
            startup_link: cli.deck.filter(|link| !link.trim().is_empty()),
            api_key,
            model: cli.model,
            share_base: cli.share_base,
        }
    }
}
