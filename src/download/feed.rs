//! Profile feed pagination.

use crate::api::SiteClient;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::media::{Post, PostExtractor};

/// Walk a profile feed from its first page until no continuation token remains.
///
/// Posts are returned in discovery order. A first page without posts ends the walk
/// immediately; later empty pages still have their continuation token followed.
pub async fn walk_feed(
    api: &SiteClient,
    extractor: &PostExtractor,
    state: &mut DownloadState,
) -> Result<Vec<Post>> {
    let mut posts = Vec::new();

    tracing::info!("Fetching feed for {}...", state.profile);

    let html = api.fetch_profile_page(&state.profile).await?;
    state.pages_fetched += 1;
    let page = extractor.parse_page(&html);

    if page.post_count == 0 {
        tracing::warn!(
            "No posts found on the start page, the layout may have changed or authentication failed"
        );
        return Ok(posts);
    }

    tracing::info!("Found {} posts on the start page", page.post_count);
    state.posts_found += page.post_count as u64;
    posts.extend(page.posts);
    let mut more_token = page.more_token;

    while let Some(token) = more_token {
        tracing::info!("Fetching additional page");

        let html = api.fetch_more_page(&token).await?;
        state.pages_fetched += 1;
        let page = extractor.parse_page(&html);

        if page.post_count > 0 {
            tracing::info!("Found {} more posts", page.post_count);
            state.posts_found += page.post_count as u64;
            posts.extend(page.posts);
        }

        more_token = page.more_token;
    }

    tracing::info!("Nothing more to process");

    Ok(posts)
}
