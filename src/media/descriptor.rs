//! Playback descriptor selection.
//!
//! Reduces a playback-resolution payload to the concrete stream URLs the
//! pipeline will download, according to the requested format bitmask.

use url::Url;

use crate::api::types::PlayInfo;
use crate::error::{Error, Result};
use crate::media::format::FormatFlags;

/// A progressive single-file stream.
#[derive(Debug, Clone)]
pub struct ProgressiveStream {
    pub url: String,
    /// Size in bytes as declared by the playback endpoint, when known.
    pub size: Option<u64>,
}

/// An adaptive audio/video stream pair requiring a remux step.
#[derive(Debug, Clone)]
pub struct AdaptiveStreams {
    pub audio_url: String,
    pub video_url: String,
}

/// Resolved media URLs for one part at the requested quality/format.
///
/// The populated fields mirror the format bits the caller requested: a
/// requested bit whose section was missing upstream is an error, never a
/// silently absent field.
#[derive(Debug, Clone, Default)]
pub struct PlaybackDescriptor {
    pub progressive: Option<ProgressiveStream>,
    pub adaptive: Option<AdaptiveStreams>,
}

/// Select the streams requested by `flags` from a playback payload.
///
/// Follows the service's ordering: the first candidate in each section is
/// the best one granted for the request.
pub fn select_streams(play: &PlayInfo, flags: FormatFlags) -> Result<PlaybackDescriptor> {
    let mut descriptor = PlaybackDescriptor::default();

    if flags.progressive() {
        let durl = play
            .durl
            .as_deref()
            .filter(|candidates| !candidates.is_empty())
            .ok_or_else(|| {
                Error::Data("playback response has no progressive (durl) section".into())
            })?;
        let first = &durl[0];
        validate_url(&first.url, "progressive stream")?;
        descriptor.progressive = Some(ProgressiveStream {
            url: first.url.clone(),
            size: first.size,
        });
    }

    if flags.dash() {
        let dash = play
            .dash
            .as_ref()
            .ok_or_else(|| Error::Data("playback response has no adaptive (dash) section".into()))?;
        let audio = dash
            .audio
            .as_deref()
            .and_then(|streams| streams.first())
            .ok_or_else(|| Error::Data("dash section has no audio streams".into()))?;
        let video = dash
            .video
            .as_deref()
            .and_then(|streams| streams.first())
            .ok_or_else(|| Error::Data("dash section has no video streams".into()))?;
        validate_url(&audio.base_url, "dash audio stream")?;
        validate_url(&video.base_url, "dash video stream")?;
        descriptor.adaptive = Some(AdaptiveStreams {
            audio_url: audio.base_url.clone(),
            video_url: video.base_url.clone(),
        });
    }

    Ok(descriptor)
}

fn validate_url(url: &str, what: &str) -> Result<()> {
    Url::parse(url).map_err(|e| Error::Data(format!("{} URL is invalid ({}): {}", what, e, url)))?;
    Ok(())
}
