//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting
//! - Media URL listing

pub mod console;
pub mod listing;
pub mod progress;
pub mod stats;

pub use console::{print_banner, print_config_summary, print_error, print_info, print_warning};
pub use listing::write_media_urls;
pub use progress::create_download_bar;
pub use stats::print_run_stats;
