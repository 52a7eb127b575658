//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

const DOWNLOAD_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";

/// Create a progress bar for downloads.
pub fn create_download_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(DOWNLOAD_TEMPLATE) {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(e) => tracing::debug!("Invalid progress template: {}", e),
    }
    bar
}
