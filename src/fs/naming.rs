//! Filename derivation.

use url::Url;

use crate::error::{Error, Result};

/// Validate a filename taken from a remote source.
///
/// The name is kept verbatim; only names that do not denote a file inside the target
/// folder are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.is_empty() || name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    Ok(name.to_string())
}

/// Sanitize a path component such as a profile name.
///
/// Separators and characters invalid on common filesystems are replaced with `_`.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized == "." || sanitized == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Filename for a media URL: the last segment of its path.
///
/// Query string and fragment are not part of the name.
pub fn filename_from_url(media_url: &str) -> Result<String> {
    let url = Url::parse(media_url)?;
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    sanitize_filename(segment).map_err(|_| {
        Error::InvalidFilename(format!("No usable filename in URL: '{}'", media_url))
    })
}

/// Name a file is written under until its transfer completes.
pub fn hidden_filename(filename: &str) -> String {
    format!(".{}", filename)
}
