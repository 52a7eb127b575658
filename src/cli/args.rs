//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Profile feed archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "feed-grabber",
    version,
    about = "Archive image and video posts from a subscription profile",
    long_about = "Walks a profile's post feed with a captured browser session and downloads every\n\
                  image and video into <profile>/images and <profile>/videos.\n\n\
                  Files that already exist are skipped, so the tool can be re-run to pick up new posts."
)]
pub struct Args {
    /// Profile to archive.
    pub profile: String,

    /// Value of the 'sess' cookie of an active browser session.
    /// Falls back to `[account] session_token` in the config file.
    #[arg(env = "GRABBER_SESSION")]
    pub session_token: Option<String>,

    /// User agent of the browser the session was taken from.
    /// Falls back to `[account] user_agent` in the config file.
    #[arg(env = "GRABBER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Print media URLs instead of downloading files.
    #[arg(long)]
    pub no_download: bool,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to an optional configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Site root to send requests to.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(token) = &self.session_token {
            config.account.session_token = token.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            config.account.user_agent = user_agent.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(base_url) = &self.base_url {
            config.options.base_url = base_url.clone();
        }

        if self.no_download {
            config.options.run_mode = RunMode::List;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
