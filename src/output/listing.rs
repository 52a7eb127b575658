//! Media URL listing for runs that do not download.

use std::io::Write;

use crate::error::Result;
use crate::media::Post;

/// Write each post's media URL on its own line, in discovery order.
pub fn write_media_urls<W: Write>(posts: &[Post], out: &mut W) -> Result<()> {
    for post in posts {
        writeln!(out, "{}", post.media_url())?;
    }
    out.flush()?;
    Ok(())
}
