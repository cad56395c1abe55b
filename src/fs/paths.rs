//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_title;

/// Name of the transient adaptive audio artifact.
pub const AUDIO_ARTIFACT: &str = "audio.m4s";

/// Name of the transient adaptive video artifact.
pub const VIDEO_ARTIFACT: &str = "video.m4s";

/// Get the final container path for a part: `<dir>/<title>.mp4`.
///
/// The title is sanitized first, so the result is always a direct child of
/// `dir`.
pub fn container_path(dir: &Path, title: &str) -> Result<PathBuf> {
    let name = sanitize_title(title)?;
    Ok(dir.join(format!("{}.mp4", name)))
}

/// Path of the transient audio elementary stream: `<dir>/audio.m4s`.
pub fn audio_artifact_path(dir: &Path) -> PathBuf {
    dir.join(AUDIO_ARTIFACT)
}

/// Path of the transient video elementary stream: `<dir>/video.m4s`.
pub fn video_artifact_path(dir: &Path) -> PathBuf {
    dir.join(VIDEO_ARTIFACT)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_path() {
        let path = container_path(Path::new("/downloads"), "episode one").unwrap();
        assert_eq!(path, PathBuf::from("/downloads/episode one.mp4"));
    }

    #[test]
    fn test_container_path_sanitizes() {
        let path = container_path(Path::new("/downloads"), "part 1/3").unwrap();
        assert_eq!(path, PathBuf::from("/downloads/part 1_3.mp4"));
        let path = container_path(Path::new("/downloads"), "Re..Zero OP").unwrap();
        assert_eq!(path, PathBuf::from("/downloads/Re..Zero OP.mp4"));
        assert!(container_path(Path::new("/downloads"), "../evil").is_err());
    }

    #[test]
    fn test_artifact_paths() {
        let dir = Path::new("/downloads");
        assert_eq!(audio_artifact_path(dir), PathBuf::from("/downloads/audio.m4s"));
        assert_eq!(video_artifact_path(dir), PathBuf::from("/downloads/video.m4s"));
    }

    #[test]
    fn test_ensure_dir_creates_missing_chain() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        assert!(!nested.exists());
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing directory
        ensure_dir(&nested).unwrap();
    }
}
