//! Post and media representation.

use std::fmt;

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Get the folder name for this media kind.
    pub fn folder_name(&self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Media reference carried by a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image { url: String },
    Video { url: String, preview_url: String },
}

/// A single media item discovered in the profile feed.
///
/// Gallery posts produce one `Post` per slide, all sharing the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Site-assigned post ID (`data-id`).
    pub id: String,

    /// Author handle without the leading `@`.
    pub author: String,

    /// Post caption, empty when the post has none.
    pub caption: String,

    pub media: Media,
}

impl Post {
    pub fn image(id: &str, author: &str, caption: &str, url: String) -> Self {
        Self {
            id: id.to_string(),
            author: author.to_string(),
            caption: caption.to_string(),
            media: Media::Image { url },
        }
    }

    pub fn video(id: &str, author: &str, caption: &str, url: String, preview_url: String) -> Self {
        Self {
            id: id.to_string(),
            author: author.to_string(),
            caption: caption.to_string(),
            media: Media::Video { url, preview_url },
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self.media {
            Media::Image { .. } => MediaKind::Image,
            Media::Video { .. } => MediaKind::Video,
        }
    }

    /// URL of the full-resolution file.
    pub fn media_url(&self) -> &str {
        match &self.media {
            Media::Image { url } | Media::Video { url, .. } => url,
        }
    }

    /// Poster image URL, only present for videos.
    pub fn preview_url(&self) -> Option<&str> {
        match &self.media {
            Media::Image { .. } => None,
            Media::Video { preview_url, .. } => Some(preview_url),
        }
    }
}
