//! Per-part download pipeline.
//!
//! Runs one part through resolve, download, and (for adaptive streams)
//! remux. Every outcome is folded into a [`PartReport`]; a failed part never
//! takes its siblings down.

use std::path::Path;

use crate::api::{BiliApi, Page};
use crate::download::remux::Remuxer;
use crate::download::state::{PartReport, Stage};
use crate::download::writer::download_to_file;
use crate::error::Result;
use crate::fs;
use crate::media::{select_streams, PlaybackDescriptor, StreamRequest, VideoId};
use crate::output::console::print_warning;

/// Everything one part run needs, borrowed from the batch driver.
pub struct PartContext<'a> {
    pub api: &'a BiliApi,
    pub remuxer: &'a Remuxer,
    pub id: &'a VideoId,
    pub request: StreamRequest,
    pub dest_dir: &'a Path,
    pub show_progress: bool,
}

/// Run the full pipeline for one part.
///
/// Infallible by design: failures are reported, not propagated, so the
/// caller decides whether the batch continues.
pub async fn run_part(ctx: &PartContext<'_>, index: usize, page: &Page) -> PartReport {
    let title = page.part.clone();
    tracing::info!("part {}: {}", index + 1, title);

    let descriptor = match resolve(ctx, page).await {
        Ok(descriptor) => descriptor,
        Err(e) => return PartReport::failed_at(index, title, Stage::Resolving, e),
    };

    let container = match fs::container_path(ctx.dest_dir, &title) {
        Ok(path) => path,
        Err(e) => return PartReport::failed_at(index, title, Stage::Resolving, e),
    };

    let mut outputs = Vec::new();
    let mut remux_failed = false;

    if let Some(progressive) = &descriptor.progressive {
        tracing::debug!("part {}: {}", index + 1, Stage::Downloading);
        if let Err(e) =
            download_to_file(ctx.api, &progressive.url, &container, ctx.show_progress).await
        {
            return PartReport::failed_at(index, title, Stage::Downloading, e);
        }
        outputs.push(container.clone());
    }

    if let Some(adaptive) = &descriptor.adaptive {
        let audio = fs::audio_artifact_path(ctx.dest_dir);
        let video = fs::video_artifact_path(ctx.dest_dir);

        tracing::debug!("part {}: {}", index + 1, Stage::DownloadingAudio);
        if let Err(e) =
            download_to_file(ctx.api, &adaptive.audio_url, &audio, ctx.show_progress).await
        {
            return PartReport::failed_at(index, title, Stage::DownloadingAudio, e);
        }

        tracing::debug!("part {}: {}", index + 1, Stage::DownloadingVideo);
        if let Err(e) =
            download_to_file(ctx.api, &adaptive.video_url, &video, ctx.show_progress).await
        {
            return PartReport::failed_at(index, title, Stage::DownloadingVideo, e);
        }

        tracing::debug!("part {}: {}", index + 1, Stage::Remuxing);
        match ctx.remuxer.remux_and_clean(&audio, &video, &container).await {
            Ok(()) => {
                if !outputs.contains(&container) {
                    outputs.push(container.clone());
                }
            }
            Err(e) => {
                // Deliberate degrade: the raw elementary streams stay on
                // disk as a usable fallback
                print_warning(&format!("{} failed for '{}': {}", Stage::Remuxing, title, e));
                outputs.push(audio);
                outputs.push(video);
                remux_failed = true;
            }
        }
    }

    if remux_failed {
        PartReport::partial(index, title, outputs)
    } else {
        PartReport::done(index, title, outputs)
    }
}

async fn resolve(ctx: &PartContext<'_>, page: &Page) -> Result<PlaybackDescriptor> {
    let play = ctx.api.get_play_info(ctx.id, page.cid, &ctx.request).await?;
    select_streams(&play, ctx.request.fnval)
}
