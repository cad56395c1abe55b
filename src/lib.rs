//! Bili Downloader - download and remux Bilibili videos.
//!
//! This library implements the acquisition pipeline behind the CLI:
//!
//! - Resolve a video's page list (the ordered parts of a multi-part upload)
//! - Resolve playback URLs per part at a requested quality and format
//! - Stream progressive files, or adaptive audio/video pairs, to disk
//! - Remux adaptive pairs into a single MP4 via an external muxing tool
//!
//! # Example
//!
//! ```no_run
//! use bili_downloader::api::BiliApi;
//! use bili_downloader::config::Session;
//! use bili_downloader::download::{download_video, BatchOptions, Remuxer};
//! use bili_downloader::media::{FormatFlags, StreamRequest, VideoId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::default();
//!     let api = BiliApi::new(session.cookie, &session.user_agent)?;
//!     let remuxer = Remuxer::new(session.ffmpeg);
//!
//!     let options = BatchOptions {
//!         id: VideoId::Bvid("BV17x411w7KC".to_string()),
//!         request: StreamRequest {
//!             qn: 64,
//!             fnval: FormatFlags::default(),
//!             fourk: false,
//!         },
//!         dest_dir: "downloads".into(),
//!         all_parts: true,
//!         fail_fast: true,
//!         jobs: 1,
//!         show_progress: true,
//!     };
//!
//!     let report = download_video(&api, &remuxer, &options).await?;
//!     println!("{} part(s) downloaded", report.completed());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::BiliApi;
pub use config::{Config, Session};
pub use download::{download_video, BatchOptions, BatchReport, PartReport, PartStatus, Remuxer};
pub use error::{Error, Result};
pub use media::{FormatFlags, StreamRequest, VideoId};
