//! Per-profile run: walk the feed, then download or list.

use std::io::Write;

use crate::api::SiteClient;
use crate::config::{Config, RunMode};
use crate::download::feed::walk_feed;
use crate::download::media::download_all;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::media::PostExtractor;
use crate::output::write_media_urls;

/// Archive one profile according to the configured run mode.
///
/// In list mode media URLs are written to `out` and the filesystem is left untouched.
pub async fn process_profile<W: Write>(
    config: &Config,
    profile: &str,
    out: &mut W,
) -> Result<DownloadState> {
    let api = SiteClient::new(&config.session()?)?;
    let extractor = PostExtractor::new()?;
    let mut state = DownloadState::new(profile.to_string());

    let posts = walk_feed(&api, &extractor, &mut state).await?;

    match config.options.run_mode {
        RunMode::List => write_media_urls(&posts, out)?,
        RunMode::Download => {
            download_all(
                &api,
                config,
                &mut state,
                &posts,
                &config.download_directory(),
            )
            .await?
        }
    }

    Ok(state)
}
