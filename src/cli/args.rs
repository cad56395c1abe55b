//! Command-line argument definitions using clap.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::{
    parse_avid, parse_bvid, validate_config, validate_cookie, validate_format, validate_jobs,
    Config, Session,
};
use crate::download::remux::DEFAULT_PROGRAM;
use crate::error::{Error, Result};
use crate::media::{FormatFlags, StreamRequest, VideoId};

/// Bilibili video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "bili-downloader",
    version,
    about = "Download and remux Bilibili videos",
    long_about = "A CLI tool to download Bilibili video parts as progressive files or as\n\
                  adaptive audio/video stream pairs remuxed into a single MP4 container."
)]
#[command(group(ArgGroup::new("video").required(true).args(["avid", "bvid"])))]
pub struct Args {
    /// Video avid (digits, an 'av'-prefixed id, or a video URL).
    #[arg(short = 'a', long)]
    pub avid: Option<String>,

    /// Video bvid ('BV...' or a video URL).
    #[arg(short = 'b', long)]
    pub bvid: Option<String>,

    /// Directory the outputs are written into.
    #[arg(short = 'p', long, default_value = ".")]
    pub path: PathBuf,

    /// Requested quality code (64 = 720p, 80 = 1080p, 112 = 1080p+, 120 = 4K).
    #[arg(long, default_value_t = 64)]
    pub qn: u32,

    /// Stream format bitmask (1 = progressive, 16 = adaptive, 17 = both).
    #[arg(long, default_value_t = 1)]
    pub fnval: u32,

    /// Allow the service to grant 4K streams.
    #[arg(long)]
    pub fourk: bool,

    /// Session cookie; falls back to the configuration file when omitted.
    #[arg(short = 'c', long, env = "BILI_COOKIE")]
    pub cookie: Option<String>,

    /// Download every part instead of only the first.
    #[arg(long)]
    pub all: bool,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Keep downloading remaining parts after a part fails.
    #[arg(long)]
    pub keep_going: bool,

    /// Concurrent part downloads (progressive format only).
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,

    /// Remux program to invoke.
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Hide the banner and per-download progress.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Resolve the video id from whichever identifier form was given.
    pub fn video_id(&self) -> Result<VideoId> {
        if let Some(avid) = &self.avid {
            return Ok(VideoId::Aid(parse_avid(avid)?));
        }
        if let Some(bvid) = &self.bvid {
            return Ok(VideoId::Bvid(parse_bvid(bvid)?));
        }

        // The clap group guarantees one of the two above
        Err(Error::Config(
            "either --avid or --bvid is required".to_string(),
        ))
    }

    /// Build the stream request from the quality and format flags.
    pub fn stream_request(&self) -> Result<StreamRequest> {
        let fnval = FormatFlags::new(self.fnval);
        validate_format(fnval)?;
        validate_jobs(self.jobs, fnval)?;

        Ok(StreamRequest {
            qn: self.qn,
            fnval,
            fourk: self.fourk,
        })
    }

    /// Resolve the session credentials.
    ///
    /// The configuration file is read only when no cookie arrived via CLI
    /// or environment; its absence is fatal at that point.
    pub fn resolve_session(&self) -> Result<Session> {
        if let Some(cookie) = self.cookie.as_deref().filter(|c| !c.trim().is_empty()) {
            validate_cookie(cookie)?;
            return Ok(Session {
                cookie: Some(cookie.to_string()),
                ffmpeg: self
                    .ffmpeg
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
                ..Session::default()
            });
        }

        let config = Config::load(&self.config)?;
        validate_config(&config)?;

        let ffmpeg = self
            .ffmpeg
            .clone()
            .or_else(|| config.ffmpeg.clone())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        Ok(Session {
            cookie: Some(config.cookie),
            user_agent: config.user_agent,
            ffmpeg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_identifier_required() {
        assert!(Args::try_parse_from(["bili-downloader"]).is_err());
        assert!(
            Args::try_parse_from(["bili-downloader", "-a", "170001", "-b", "BV17x411w7KC"])
                .is_err()
        );
        assert!(Args::try_parse_from(["bili-downloader", "-a", "170001"]).is_ok());
        assert!(Args::try_parse_from(["bili-downloader", "-b", "BV17x411w7KC"]).is_ok());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bili-downloader", "-a", "170001"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.qn, 64);
        assert_eq!(args.fnval, 1);
        assert!(!args.fourk);
        assert!(!args.all);
        assert!(!args.keep_going);
        assert_eq!(args.jobs, 1);
        assert_eq!(args.config, PathBuf::from("config.json"));
    }

    #[test]
    fn test_video_id_resolution() {
        let args = Args::try_parse_from(["bili-downloader", "-a", "av170001"]).unwrap();
        assert_eq!(args.video_id().unwrap(), VideoId::Aid(170001));

        let args = Args::try_parse_from([
            "bili-downloader",
            "-b",
            "https://www.bilibili.com/video/BV17x411w7KC",
        ])
        .unwrap();
        assert_eq!(
            args.video_id().unwrap(),
            VideoId::Bvid("BV17x411w7KC".into())
        );
    }

    #[test]
    fn test_stream_request_validation() {
        let args =
            Args::try_parse_from(["bili-downloader", "-a", "1", "--fnval", "0"]).unwrap();
        assert!(args.stream_request().is_err());

        let args = Args::try_parse_from([
            "bili-downloader", "-a", "1", "--fnval", "16", "--jobs", "2",
        ])
        .unwrap();
        assert!(args.stream_request().is_err());

        let args = Args::try_parse_from([
            "bili-downloader", "-a", "1", "--qn", "80", "--fnval", "17", "--fourk",
        ])
        .unwrap();
        let request = args.stream_request().unwrap();
        assert_eq!(request.qn, 80);
        assert!(request.fnval.progressive());
        assert!(request.fnval.dash());
        assert!(request.fourk);
    }
}
