//! Download state tracking.

use std::path::PathBuf;

use crate::media::MediaKind;

/// Per-run download statistics.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub profile: String,

    /// Set once downloading starts.
    pub profile_folder: PathBuf,

    // Feed statistics
    pub pages_fetched: u64,
    pub posts_found: u64,

    // Download statistics
    pub image_count: u64,
    pub video_count: u64,
    pub skipped_count: u64,
}

impl DownloadState {
    pub fn new(profile: String) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    /// Record a completed download.
    pub fn record_download(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Image => self.image_count += 1,
            MediaKind::Video => self.video_count += 1,
        }
    }

    /// Record a file that was already present.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Get total downloaded count.
    pub fn total_downloaded(&self) -> u64 {
        self.image_count + self.video_count
    }
}
