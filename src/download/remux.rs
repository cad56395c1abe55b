//! External remux invocation.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Default remux program, looked up on `PATH`.
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Invokes the external muxing tool to combine elementary streams.
#[derive(Debug, Clone)]
pub struct Remuxer {
    program: String,
}

impl Remuxer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Remux separate audio and video elementary streams into one container,
    /// then remove the two inputs.
    ///
    /// Removal failure is logged, not propagated; the remux already
    /// succeeded at that point.
    pub async fn remux_and_clean(&self, audio: &Path, video: &Path, output: &Path) -> Result<()> {
        self.remux(audio, video, output).await?;

        for artifact in [audio, video] {
            if let Err(e) = tokio::fs::remove_file(artifact).await {
                tracing::warn!("could not remove {}: {}", artifact.display(), e);
            }
        }
        Ok(())
    }

    /// Run the muxing process, stream-copying both tracks (no re-encode).
    ///
    /// Paths are passed as plain arguments; nothing goes through a shell.
    pub async fn remux(&self, audio: &Path, video: &Path, output: &Path) -> Result<()> {
        tracing::debug!(
            "remuxing {} + {} into {}",
            video.display(),
            audio.display(),
            output.display()
        );

        let status = Command::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(video)
            .arg("-i")
            .arg(audio)
            .args(["-c:v", "copy", "-c:a", "copy", "-f", "mp4"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::FFmpegNotFound,
                _ => Error::FFmpeg(format!("failed to run {}: {}", self.program, e)),
            })?;

        if !status.success() {
            return Err(Error::FFmpeg(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

impl Default for Remuxer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}
