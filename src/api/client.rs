//! Bilibili API HTTP client.

use reqwest::{header, Client, Response};

use crate::api::types::{ApiResponse, Page, PlayInfo};
use crate::error::{Error, Result};
use crate::media::{StreamRequest, VideoId};

/// Bilibili API base URL.
const API_BASE: &str = "https://api.bilibili.com";

/// Referer expected by both the API and the media CDN.
const REFERER: &str = "https://www.bilibili.com";

/// Bilibili API client.
///
/// Carries the resolved session cookie as a value; credential lookup is the
/// caller's concern and never happens here.
pub struct BiliApi {
    client: Client,
    base: String,
    cookie: Option<String>,
}

impl BiliApi {
    /// Create a new API client against the public endpoint.
    ///
    /// `cookie` is attached to every request when present; without it only
    /// publicly visible qualities and formats are served (a service-side
    /// policy, not enforced locally).
    pub fn new(cookie: Option<String>, user_agent: &str) -> Result<Self> {
        Self::with_base(API_BASE, cookie, user_agent)
    }

    /// Create a client against an alternative API host, e.g. a mirror or a
    /// local stand-in.
    pub fn with_base(
        base: impl Into<String>,
        cookie: Option<String>,
        user_agent: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: base.into(),
            cookie,
        })
    }

    /// Build a GET request with the headers every endpoint expects.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header(header::REFERER, REFERER);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie.as_str());
        }
        request
    }

    /// Fetch the ordered page list for a video.
    pub async fn get_page_list(&self, id: &VideoId) -> Result<Vec<Page>> {
        let url = format!("{}/x/player/pagelist", self.base);
        let (key, value) = id.pagelist_param();

        tracing::debug!("GET {}?{}={}", url, key, value);
        let response = self
            .request(&url)
            .query(&[(key, value.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "page-list request for {} failed: HTTP {}",
                id, status
            )));
        }

        let text = response.text().await?;
        tracing::debug!("page-list response: {}", text);
        parse_page_list(&text)
    }

    /// Resolve playback info for one page at the requested quality/format.
    pub async fn get_play_info(
        &self,
        id: &VideoId,
        cid: u64,
        request: &StreamRequest,
    ) -> Result<PlayInfo> {
        let url = format!("{}/x/player/playurl", self.base);
        let (key, value) = id.playurl_param();
        let query = [
            (key, value),
            ("cid", cid.to_string()),
            ("qn", request.qn.to_string()),
            ("fnval", request.fnval.bits().to_string()),
            ("fourk", if request.fourk { "1" } else { "0" }.to_string()),
        ];

        tracing::debug!("GET {} for {} cid {}", url, id, cid);
        let response = self.request(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "playback request for {} (cid {}) failed: HTTP {}",
                id, cid, status
            )));
        }

        let text = response.text().await?;
        tracing::debug!("playback response: {}", text);
        parse_play_info(&text)
    }

    /// GET a media URL for streaming download.
    ///
    /// The CDN applies the same referer/cookie policy as the API, so the
    /// common headers are attached here too.
    pub async fn get_stream(&self, url: &str) -> Result<Response> {
        let response = self.request(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "stream request failed: HTTP {}",
                status
            )));
        }

        Ok(response)
    }
}

fn parse_page_list(text: &str) -> Result<Vec<Page>> {
    let envelope: ApiResponse<Vec<Page>> = serde_json::from_str(text)
        .map_err(|e| Error::Data(format!("malformed page-list response: {}", e)))?;
    envelope.into_data("page-list")
}

fn parse_play_info(text: &str) -> Result<PlayInfo> {
    let envelope: ApiResponse<PlayInfo> = serde_json::from_str(text)
        .map_err(|e| Error::Data(format!("malformed playback response: {}", e)))?;
    envelope.into_data("playback")
}
