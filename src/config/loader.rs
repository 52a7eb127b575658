//! Configuration structures and loading logic.

use crate::api::SessionConfig;
use crate::config::modes::RunMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Default site root.
pub const DEFAULT_BASE_URL: &str = "https://onlyfans.com";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Value of the `sess` cookie from a logged-in browser.
    #[serde(default)]
    pub session_token: String,

    /// User agent of the browser the cookie came from.
    #[serde(default)]
    pub user_agent: String,
}

/// Run options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Download media or only list URLs.
    #[serde(default)]
    pub run_mode: RunMode,

    /// Root directory profile folders are created in.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Site root all page requests are made against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to show files skipped because they already exist.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            run_mode: RunMode::default(),
            download_directory: None,
            base_url: default_base_url(),
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Site root as a URL that relative paths can be joined onto.
    pub fn base_url(&self) -> Result<Url> {
        let mut base = self.options.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?)
    }

    /// Session state for the HTTP client.
    pub fn session(&self) -> Result<SessionConfig> {
        Ok(SessionConfig {
            session_token: self.account.session_token.clone(),
            user_agent: self.account.user_agent.clone(),
            base_url: self.base_url()?,
        })
    }
}
