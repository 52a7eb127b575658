//! Run mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with the posts collected from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Download media files (default).
    #[default]
    Download,
    /// Print media URLs to stdout without touching the filesystem.
    List,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Download => write!(f, "download"),
            RunMode::List => write!(f, "list"),
        }
    }
}
