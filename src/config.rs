use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::{default_user_agent, ClientConfig, HashType, DEFAULT_BASE_URL};
use crate::output::OutputFormat;
use crate::status;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    /// 0 disables the timeout
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsSection {
    pub hash_type: Option<HashType>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line (or through their env vars).
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        for path in config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn client_config(&self, overrides: ApiOverrides) -> ClientConfig {
        let api = &self.api;

        let base_url = overrides
            .base_url
            .map(String::from)
            .or_else(|| api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = overrides
            .timeout_secs
            .or(api.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let user_agent = api.user_agent.clone().unwrap_or_else(default_user_agent);

        ClientConfig {
            base_url,
            timeout,
            user_agent,
        }
    }

    pub fn hash_type(&self, flag: Option<HashType>) -> HashType {
        flag.or(self.defaults.hash_type).unwrap_or_default()
    }

    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.defaults.format).unwrap_or_default()
    }

    /// Format for commands that print a single document. A configured
    /// `table` default only applies to `search` and falls back to plain.
    pub fn document_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        match self.format(flag) {
            OutputFormat::Table => {
                status!("Table output is only available for search; using plain");
                OutputFormat::Plain
            }
            other => other,
        }
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".weakpass.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("weakpass").join("config.toml"));
    }

    paths
}
