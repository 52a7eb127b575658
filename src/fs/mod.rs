//! Filesystem module.
//!
//! Provides:
//! - Profile and media folder layout
//! - Filename derivation from media URLs

pub mod naming;
pub mod paths;

pub use naming::{filename_from_url, hidden_filename, sanitize_filename, sanitize_path_component};
pub use paths::{ensure_media_dirs, get_media_folder, get_profile_folder};
