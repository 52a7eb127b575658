//! Statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print statistics for a finished run.
pub fn print_run_stats(state: &DownloadState) {
    eprintln!();
    eprintln!("{}", style("═".repeat(50)).dim());
    eprintln!(
        "{}",
        style(format!("Statistics for {}:", state.profile)).bold()
    );
    eprintln!("  Pages:   {}", state.pages_fetched);
    eprintln!("  Posts:   {}", state.posts_found);
    eprintln!("  Images:  {}", state.image_count);
    eprintln!("  Videos:  {}", state.video_count);
    eprintln!(
        "  Skipped: {} (already exist)",
        style(state.skipped_count).yellow()
    );
    eprintln!(
        "  Total:   {} downloaded",
        style(state.total_downloaded()).green()
    );
    eprintln!("{}", style("═".repeat(50)).dim());
}
