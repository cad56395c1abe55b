//! CLI module.
//!
//! Provides:
//! - Command-line argument definitions and session resolution

pub mod args;

pub use args::Args;
