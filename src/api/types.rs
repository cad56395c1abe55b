//! API response type definitions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Generic envelope wrapping every api.bilibili.com response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, mapping service-level failures to errors.
    ///
    /// A non-zero `code` means the service refused the request (bad id,
    /// insufficient authorization, removed content); a zero code without a
    /// `data` payload means the response shape changed upstream.
    pub fn into_data(self, context: &str) -> Result<T> {
        if self.code != 0 {
            return Err(Error::Api(format!(
                "{} request refused: {} (code {})",
                context, self.message, self.code
            )));
        }
        self.data
            .ok_or_else(|| Error::Data(format!("{} response has no data payload", context)))
    }
}

/// One page (part) of a video, as listed by the page-list endpoint.
///
/// The upstream array order is significant: the first entry is part 1.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Internal stream identifier used by the playback endpoint.
    pub cid: u64,
    /// 1-based page number.
    #[serde(default)]
    pub page: u32,
    /// Display title of the part, used for the output filename.
    pub part: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u64,
}

/// Payload of the playback-resolution endpoint.
///
/// Which of `durl`/`dash` is present depends on the requested format
/// bitmask and on service-side authorization.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayInfo {
    /// Quality actually granted (may be lower than requested).
    pub quality: Option<u32>,
    /// Quality codes available for this stream.
    #[serde(default)]
    pub accept_quality: Vec<u32>,
    /// Human-readable names matching `accept_quality`.
    #[serde(default)]
    pub accept_description: Vec<String>,
    /// Progressive stream candidates.
    pub durl: Option<Vec<Durl>>,
    /// Adaptive stream sections.
    pub dash: Option<Dash>,
}

/// A progressive stream candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Durl {
    pub url: String,
    /// Size in bytes, when declared.
    pub size: Option<u64>,
    /// Duration in milliseconds.
    pub length: Option<u64>,
    #[serde(default)]
    pub backup_url: Option<Vec<String>>,
}

/// Adaptive stream sections, each ordered best-first by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Dash {
    #[serde(default)]
    pub video: Option<Vec<DashStream>>,
    #[serde(default)]
    pub audio: Option<Vec<DashStream>>,
}

/// One adaptive elementary stream.
#[derive(Debug, Clone, Deserialize)]
pub struct DashStream {
    pub id: u32,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(default, rename = "backupUrl")]
    pub backup_url: Option<Vec<String>>,
    pub bandwidth: Option<u64>,
    pub codecs: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code":0,"message":"0","ttl":1,"data":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.into_data("test").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_nonzero_code() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code":-404,"message":"nothing found","ttl":1}"#).unwrap();
        let err = envelope.into_data("page-list").unwrap_err();
        match err {
            Error::Api(msg) => {
                assert!(msg.contains("-404"));
                assert!(msg.contains("nothing found"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_missing_data() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code":0,"message":"0","ttl":1}"#).unwrap();
        assert!(matches!(envelope.into_data("test"), Err(Error::Data(_))));
    }

    #[test]
    fn test_dash_stream_base_url_key() {
        let stream: DashStream = serde_json::from_str(
            r#"{"id":30280,"baseUrl":"https://cdn.example/a.m4s","bandwidth":192000}"#,
        )
        .unwrap();
        assert_eq!(stream.base_url, "https://cdn.example/a.m4s");
        assert_eq!(stream.bandwidth, Some(192_000));
    }
}
