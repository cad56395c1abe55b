//! Streaming download writer.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::BiliApi;
use crate::error::{Error, Result};
use crate::output::progress::{create_byte_spinner, create_download_bar};

/// A single download: source URL, destination file, expected byte length.
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    pub url: String,
    pub dest: PathBuf,
    /// Server-declared Content-Length; sizes the progress bar when present.
    pub total: Option<u64>,
}

/// Fetch `url` and stream the body into `dest`.
///
/// Returns the number of bytes written.
pub async fn download_to_file(
    api: &BiliApi,
    url: &str,
    dest: &Path,
    show_progress: bool,
) -> Result<u64> {
    let response = api.get_stream(url).await?;
    let target = DownloadTarget {
        url: url.to_string(),
        dest: dest.to_path_buf(),
        total: response.content_length(),
    };
    write_stream(response, &target, show_progress).await
}

/// Stream a response body into the target file, chunk by chunk.
///
/// Every missing parent directory is created first. An existing file at the
/// destination is overwritten without confirmation. A mid-stream failure
/// leaves the truncated file in place.
pub async fn write_stream(
    response: reqwest::Response,
    target: &DownloadTarget,
    show_progress: bool,
) -> Result<u64> {
    tracing::debug!("writing {} to {}", target.url, target.dest.display());

    if let Some(parent) = target.dest.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let progress = if show_progress {
        match target.total {
            Some(total) => create_download_bar(total),
            None => create_byte_spinner(),
        }
    } else {
        ProgressBar::hidden()
    };

    let mut file = File::create(&target.dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                // Flush what arrived; the truncated file stays on disk
                file.flush().await?;
                progress.finish_and_clear();
                return Err(Error::Network(format!("stream interrupted: {}", e)));
            }
        };
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        progress.set_position(downloaded);
    }

    file.flush().await?;
    progress.finish_and_clear();

    Ok(downloaded)
}
