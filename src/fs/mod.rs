//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename sanitization

pub mod naming;
pub mod paths;

pub use naming::sanitize_title;
pub use paths::{
    audio_artifact_path, container_path, ensure_dir, video_artifact_path, AUDIO_ARTIFACT,
    VIDEO_ARTIFACT,
};
