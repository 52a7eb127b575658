//! Configuration module for feed-grabber.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Run modes
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig, DEFAULT_BASE_URL};
pub use modes::RunMode;
pub use validation::{validate_config, validate_profile};
