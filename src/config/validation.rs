//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Profile names accepted by the site.
const PROFILE_PATTERN: &str = r"^[A-Za-z0-9_.-]{1,64}$";

/// Validate the configuration before any request is made.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_session_token(&config.account.session_token)?;
    validate_user_agent(&config.account.user_agent)?;
    validate_base_url(config)?;

    Ok(())
}

/// Validate the session cookie value.
pub fn validate_session_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig("session_token".to_string()));
    }

    if token.contains(';') || token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::ConfigValidation {
            field: "session_token".to_string(),
            message: "Session token must be the bare cookie value without spaces or ';'"
                .to_string(),
        });
    }

    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_session") {
        return Err(Error::ConfigValidation {
            field: "session_token".to_string(),
            message: "Session token appears to be a placeholder. Copy the 'sess' cookie from your browser."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    let ua_lower = user_agent.to_lowercase();
    if ua_lower.contains("replaceme") || ua_lower.contains("your_user_agent") {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message:
                "User agent appears to be a placeholder. Please provide your browser's user agent."
                    .to_string(),
        });
    }

    Ok(())
}

/// Validate the site base URL.
pub fn validate_base_url(config: &Config) -> Result<()> {
    let url = config.base_url().map_err(|e| Error::ConfigValidation {
        field: "base_url".to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate a profile name and return it without a leading `@`.
pub fn validate_profile(profile: &str) -> Result<String> {
    let clean = profile.trim().trim_start_matches('@');

    if clean.is_empty() {
        return Err(Error::MissingConfig("profile".to_string()));
    }

    let pattern = Regex::new(PROFILE_PATTERN).map_err(|e| Error::Config(e.to_string()))?;
    if !pattern.is_match(clean) || clean == "." || clean == ".." {
        return Err(Error::ConfigValidation {
            field: "profile".to_string(),
            message: format!(
                "Profile '{}' contains invalid characters. Only alphanumeric, '.', '-' and '_' allowed.",
                profile
            ),
        });
    }

    Ok(clean.to_string())
}
