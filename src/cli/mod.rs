pub mod range;
pub mod search;
pub mod wordlists;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::Client;
use crate::config::{ApiOverrides, Config};

#[derive(Parser)]
#[command(name = "weakpass")]
#[command(about = "Look up password hashes with the Weakpass API")]
#[command(version)]
pub struct Cli {
    /// Suppress status messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// API base URL (or WEAKPASS_BASE_URL env var)
    #[arg(long, global = true, env = "WEAKPASS_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds, 0 waits indefinitely (or WEAKPASS_TIMEOUT env var)
    #[arg(long, global = true, env = "WEAKPASS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Config file (default: ./.weakpass.toml, then the user config directory)
    #[arg(long, global = true, env = "WEAKPASS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve hash-password pairs based on prefix
    Range(range::RangeArgs),
    /// Search for a supplied hash or hashes in the database
    Search(search::SearchArgs),
    /// Get the list of available wordlists
    Wordlists(wordlists::WordlistsArgs),
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn client(&self, config: &Config) -> Result<Client> {
        let overrides = ApiOverrides {
            base_url: self.base_url.as_deref(),
            timeout_secs: self.timeout,
        };
        Ok(Client::new(config.client_config(overrides))?)
    }
}
