//! Bilibili API module.
//!
//! This module provides:
//! - HTTP client for the Bilibili REST API
//! - API response envelope and payload types

pub mod client;
pub mod types;

pub use client::BiliApi;
pub use types::*;
