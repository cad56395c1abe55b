//! Batch driver: resolves the manifest and runs each part's pipeline.

use std::cell::Cell;
use std::path::PathBuf;

use futures::future::{self, FutureExt};
use futures::stream::{self, StreamExt};

use crate::api::BiliApi;
use crate::download::part::{run_part, PartContext};
use crate::download::remux::Remuxer;
use crate::download::state::{BatchReport, PartReport};
use crate::error::Result;
use crate::fs;
use crate::media::{StreamRequest, VideoId};
use crate::output::console::{print_info, print_warning};

/// Batch run options, resolved from CLI and config.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub id: VideoId,
    pub request: StreamRequest,
    pub dest_dir: PathBuf,
    /// Download every part instead of only the first.
    pub all_parts: bool,
    /// Abort the batch on the first failed part.
    pub fail_fast: bool,
    /// Worker pool width; 1 means strictly sequential.
    pub jobs: usize,
    pub show_progress: bool,
}

/// Download a video: resolve its page list, then run the per-part pipeline
/// over the selected parts.
///
/// Only pre-part work can fail here (manifest resolution, destination
/// directory). Per-part outcomes, including failures, live in the report.
pub async fn download_video(
    api: &BiliApi,
    remuxer: &Remuxer,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let mut pages = api.get_page_list(&options.id).await?;
    if pages.is_empty() {
        print_warning(&format!("{} has no parts", options.id));
        return Ok(BatchReport::default());
    }

    if !options.all_parts {
        pages.truncate(1);
    }

    if options.show_progress {
        print_info(&format!(
            "{}: {} part(s) to download",
            options.id,
            pages.len()
        ));
    }
    tracing::debug!("destination directory: {}", options.dest_dir.display());
    fs::ensure_dir(&options.dest_dir)?;

    let jobs = options.jobs.max(1);
    let ctx = PartContext {
        api,
        remuxer,
        id: &options.id,
        request: options.request,
        dest_dir: &options.dest_dir,
        // Interleaved per-file bars are unreadable, so a pool wider than one
        // runs without them
        show_progress: options.show_progress && jobs == 1,
    };

    let mut report = BatchReport::default();
    let mut aborted = false;

    {
        let halted = Cell::new(false);
        // buffered (not buffer_unordered) keeps reports in manifest order;
        // the take_while gate stops further parts from starting once halted
        let mut results = stream::iter(pages.iter().enumerate())
            .take_while(|_| future::ready(!halted.get()))
            .map(|(index, page)| run_part(&ctx, index, page))
            .buffered(jobs);

        while let Some(part) = results.next().await {
            let failed = part.is_failure();
            report.push(part);
            if failed && options.fail_fast {
                halted.set(true);
                aborted = true;
                break;
            }
        }

        if aborted {
            // Pooled parts that finished before the failure was collected
            // already wrote their outputs; keep their reports
            while let Some(Some(part)) = results.next().now_or_never() {
                report.push(part);
            }
        }
        // Leaving the scope drops the stream, cancelling in-flight parts
    }

    if aborted {
        for index in report.parts.len()..pages.len() {
            report.push(PartReport::skipped(index, pages[index].part.clone()));
        }
    }

    Ok(report)
}
