//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;
use crate::media::MediaKind;

/// Folder holding everything downloaded for a profile.
pub fn get_profile_folder(destination_root: &Path, profile: &str) -> Result<PathBuf> {
    let folder = sanitize_path_component(profile)?;
    Ok(destination_root.join(folder))
}

/// Folder for one media kind inside a profile folder.
pub fn get_media_folder(profile_folder: &Path, kind: MediaKind) -> PathBuf {
    profile_folder.join(kind.folder_name())
}

/// Create the profile folder and its media subfolders if absent.
pub async fn ensure_media_dirs(profile_folder: &Path) -> Result<()> {
    for kind in [MediaKind::Image, MediaKind::Video] {
        tokio::fs::create_dir_all(get_media_folder(profile_folder, kind)).await?;
    }
    Ok(())
}
