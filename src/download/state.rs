//! Per-part pipeline state and batch reporting.

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Stage of the per-part pipeline.
///
/// Adaptive parts walk resolving, downloading audio, downloading video,
/// remuxing; progressive parts walk resolving, downloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Downloading,
    DownloadingAudio,
    DownloadingVideo,
    Remuxing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolving => "resolving",
            Stage::Downloading => "downloading",
            Stage::DownloadingAudio => "downloading audio",
            Stage::DownloadingVideo => "downloading video",
            Stage::Remuxing => "remuxing",
        };
        write!(f, "{}", name)
    }
}

/// Terminal status of one part's pipeline run.
#[derive(Debug)]
pub enum PartStatus {
    /// Every requested output was produced.
    Done { outputs: Vec<PathBuf> },
    /// The elementary streams were downloaded but the remux step failed;
    /// the raw streams remain on disk as the outputs.
    DonePartial { outputs: Vec<PathBuf> },
    /// The pipeline failed at `stage`.
    Failed { stage: Stage, error: Error },
    /// Never attempted because an earlier part failed under fail-fast.
    Skipped,
}

/// Outcome report for one part, identified by its manifest position.
#[derive(Debug)]
pub struct PartReport {
    pub index: usize,
    pub title: String,
    pub status: PartStatus,
}

impl PartReport {
    pub fn done(index: usize, title: String, outputs: Vec<PathBuf>) -> Self {
        Self {
            index,
            title,
            status: PartStatus::Done { outputs },
        }
    }

    pub fn partial(index: usize, title: String, outputs: Vec<PathBuf>) -> Self {
        Self {
            index,
            title,
            status: PartStatus::DonePartial { outputs },
        }
    }

    pub fn failed_at(index: usize, title: String, stage: Stage, error: Error) -> Self {
        Self {
            index,
            title,
            status: PartStatus::Failed { stage, error },
        }
    }

    pub fn skipped(index: usize, title: String) -> Self {
        Self {
            index,
            title,
            status: PartStatus::Skipped,
        }
    }

    /// Whether this part's pipeline failed outright.
    pub fn is_failure(&self) -> bool {
        matches!(self.status, PartStatus::Failed { .. })
    }
}

/// Collected outcomes for a whole invocation, in manifest order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub parts: Vec<PartReport>,
}

impl BatchReport {
    pub fn push(&mut self, part: PartReport) {
        self.parts.push(part);
    }

    /// Number of fully completed parts.
    pub fn completed(&self) -> usize {
        self.count(|s| matches!(s, PartStatus::Done { .. }))
    }

    /// Number of parts left un-remuxed with their elementary streams on disk.
    pub fn partial(&self) -> usize {
        self.count(|s| matches!(s, PartStatus::DonePartial { .. }))
    }

    /// Number of failed parts.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, PartStatus::Failed { .. }))
    }

    /// Number of parts skipped after a fail-fast abort.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, PartStatus::Skipped))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// The first failed part's error, in manifest order.
    pub fn first_failure(&self) -> Option<&Error> {
        self.parts.iter().find_map(|p| match &p.status {
            PartStatus::Failed { error, .. } => Some(error),
            _ => None,
        })
    }

    /// Consume the report, yielding the first failed part's error.
    pub fn into_first_error(self) -> Option<Error> {
        self.parts.into_iter().find_map(|p| match p.status {
            PartStatus::Failed { error, .. } => Some(error),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&PartStatus) -> bool) -> usize {
        self.parts.iter().filter(|p| pred(&p.status)).count()
    }
}
