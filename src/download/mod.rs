//! Download module for the acquisition pipeline.
//!
//! This module provides:
//! - Streaming writer for single files
//! - External remux invocation
//! - Per-part pipeline state and reporting
//! - The batch driver tying them together

pub mod batch;
pub mod part;
pub mod remux;
pub mod state;
pub mod writer;

pub use batch::{download_video, BatchOptions};
pub use part::{run_part, PartContext};
pub use remux::Remuxer;
pub use state::{BatchReport, PartReport, PartStatus, Stage};
pub use writer::{download_to_file, write_stream, DownloadTarget};
