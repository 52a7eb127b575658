//! Site API module.
//!
//! This module provides:
//! - Session cookie and user agent handling
//! - HTTP client for feed pages and media files

pub mod auth;
pub mod client;

pub use auth::SessionConfig;
pub use client::SiteClient;
