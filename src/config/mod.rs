//! Configuration module for bili-downloader.
//!
//! This module handles:
//! - Loading the JSON credential file
//! - Session resolution from CLI and config values
//! - Validation of configuration and request parameters

pub mod loader;
pub mod validation;

pub use loader::{Config, Session};
pub use validation::{
    parse_avid, parse_bvid, validate_config, validate_cookie, validate_format, validate_jobs,
};
