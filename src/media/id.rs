//! Video identifiers.

use std::fmt;

/// Identifier for a video, using one of the two alternate key schemes.
///
/// Exactly one scheme applies per invocation; the CLI enforces the
/// mutual exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoId {
    /// Numeric av-id (the platform's primary key).
    Aid(u64),
    /// Alphanumeric BV-id (the public key scheme), including the `BV` prefix.
    Bvid(String),
}

impl VideoId {
    /// Query parameter for the page-list endpoint, which spells the
    /// numeric key `aid`.
    pub fn pagelist_param(&self) -> (&'static str, String) {
        match self {
            VideoId::Aid(id) => ("aid", id.to_string()),
            VideoId::Bvid(id) => ("bvid", id.clone()),
        }
    }

    /// Query parameter for the playback-resolution endpoint, which spells
    /// the numeric key `avid` instead of `aid`.
    pub fn playurl_param(&self) -> (&'static str, String) {
        match self {
            VideoId::Aid(id) => ("avid", id.to_string()),
            VideoId::Bvid(id) => ("bvid", id.clone()),
        }
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoId::Aid(id) => write!(f, "av{}", id),
            VideoId::Bvid(id) => write!(f, "{}", id),
        }
    }
}
