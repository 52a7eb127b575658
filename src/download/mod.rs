//! Download module for feed walking and media downloading.
//!
//! This module provides:
//! - Download state tracking
//! - Profile feed pagination
//! - Media file downloading
//! - Per-profile orchestration

pub mod feed;
pub mod media;
pub mod profile;
pub mod state;

pub use feed::walk_feed;
pub use media::{download_all, download_media_item, write_stream_atomically};
pub use profile::process_profile;
pub use state::DownloadState;
