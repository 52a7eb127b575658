//! Feed Grabber - archive image and video posts from a subscription profile.
//!
//! This library provides the pieces behind the `feed-grabber` binary.
//!
//! # Features
//!
//! - Session cookie authentication
//! - Feed pagination through "load more" continuation tokens
//! - Post extraction for single images, galleries and videos
//! - Resumable downloads (existing files are skipped)
//! - Atomic file placement through hidden temporary names
//!
//! # Example
//!
//! ```no_run
//! use feed_grabber::{process_profile, Config, RunMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.session_token = "sess-cookie-value".to_string();
//!     config.account.user_agent = "Mozilla/5.0 (X11; Linux x86_64)".to_string();
//!     config.options.run_mode = RunMode::List;
//!
//!     let state = process_profile(&config, "someprofile", &mut std::io::stdout()).await?;
//!     eprintln!("{} posts found", state.posts_found);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{SessionConfig, SiteClient};
pub use config::{Config, RunMode};
pub use download::{download_all, process_profile, walk_feed, DownloadState};
pub use error::{Error, Result};
pub use media::{Media, MediaKind, Post, PostExtractor};
