//! Stream format selection.

use std::fmt;

/// Format-capability bitmask sent as the `fnval` query parameter.
///
/// Bit 0 requests a progressive stream (the `durl` section of the playback
/// response), bit 4 requests an adaptive DASH pair (the `dash` section).
/// Both bits may be set in the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlags(u32);

impl FormatFlags {
    /// Progressive single-file stream.
    pub const PROGRESSIVE: u32 = 1;
    /// Adaptive audio/video stream pair.
    pub const DASH: u32 = 1 << 4;

    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bitmask, passed through to the service unchanged.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Whether a progressive stream is requested.
    pub fn progressive(&self) -> bool {
        self.0 & Self::PROGRESSIVE != 0
    }

    /// Whether an adaptive DASH pair is requested.
    pub fn dash(&self) -> bool {
        self.0 & Self::DASH != 0
    }

    /// True when no supported stream type is selected.
    pub fn is_empty(&self) -> bool {
        !self.progressive() && !self.dash()
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self(Self::PROGRESSIVE)
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.progressive(), self.dash()) {
            (true, true) => write!(f, "progressive+dash"),
            (true, false) => write!(f, "progressive"),
            (false, true) => write!(f, "dash"),
            (false, false) => write!(f, "none"),
        }
    }
}

/// Parameters governing a playback-resolution request.
#[derive(Debug, Clone, Copy)]
pub struct StreamRequest {
    /// Requested quality code (e.g. 64 for 720p, 80 for 1080p).
    pub qn: u32,
    /// Stream format capability bitmask.
    pub fnval: FormatFlags,
    /// Whether 4K resolution may be granted.
    pub fourk: bool,
}
