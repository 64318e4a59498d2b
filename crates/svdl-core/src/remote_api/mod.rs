//! Remote metadata API adapter.
//!
//! Speaks to the social-media-video-downloader gateway: one GET per
//! resolution, the video URL percent-encoded into a query parameter and the
//! credential carried in vendor headers. The transport is libcurl's blocking
//! easy API; async callers go through [`fetch_links_async`], which parks the
//! transfer on the blocking pool.

mod parse;

pub use parse::{parse_response, select_link, ApiLink, ApiResponse};

use crate::error::ResolveError;
use curl::easy::{Easy, List};
use std::time::Duration;

/// Hostname of the metadata gateway.
pub const API_HOST: &str = "social-media-video-downloader.p.rapidapi.com";

/// Path of the all-platforms link listing endpoint.
pub const API_PATH: &str = "/smvd/get/all";

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header naming the gateway host, required alongside the key.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where remote resolution requests go.
///
/// The default points at the production gateway; tests retarget it at a
/// local server with [`RemoteApi::at_base`]. The host header stays pinned to
/// the gateway name either way, since the gateway routes on it.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    /// Full endpoint URL, scheme through path, without a query string.
    pub endpoint: String,
    /// Value sent in the host header.
    pub host_header: String,
}

impl Default for RemoteApi {
    fn default() -> Self {
        RemoteApi {
            endpoint: format!("https://{}{}", API_HOST, API_PATH),
            host_header: API_HOST.to_string(),
        }
    }
}

impl RemoteApi {
    /// Targets the standard endpoint path under a different base URL.
    pub fn at_base(base: &str) -> Self {
        RemoteApi {
            endpoint: format!("{}{}", base.trim_end_matches('/'), API_PATH),
            host_header: API_HOST.to_string(),
        }
    }
}

/// Performs one metadata request and parses the link listing.
///
/// Blocking; call from `spawn_blocking` if used from async code. HTTP 401
/// and 403 map to [`ResolveError::RemoteAuth`]; any other non-2xx status,
/// transport failure, or unparseable body maps to
/// [`ResolveError::RemoteApi`].
pub fn fetch_links(
    api: &RemoteApi,
    video_url: &str,
    credential: &str,
) -> Result<ApiResponse, ResolveError> {
    let request_url = build_request_url(&api.endpoint, video_url)?;

    let mut easy = Easy::new();
    easy.url(&request_url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(REQUEST_TIMEOUT)?;

    let mut headers = List::new();
    headers.append(&format!("{}: {}", API_KEY_HEADER, credential))?;
    headers.append(&format!("{}: {}", API_HOST_HEADER, api.host_header))?;
    easy.http_headers(headers)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(status, bytes = body.len(), "metadata response received");

    match status {
        401 | 403 => Err(ResolveError::RemoteAuth { status }),
        200..=299 => parse_response(&body),
        other => Err(ResolveError::RemoteApi {
            reason: format!("HTTP {}", other),
        }),
    }
}

/// Async wrapper over [`fetch_links`] using the blocking pool.
pub async fn fetch_links_async(
    api: RemoteApi,
    video_url: String,
    credential: String,
) -> Result<ApiResponse, ResolveError> {
    tokio::task::spawn_blocking(move || fetch_links(&api, &video_url, &credential))
        .await
        .map_err(|e| ResolveError::RemoteApi {
            reason: format!("request task failed: {}", e),
        })?
}

/// Appends the target URL as a percent-encoded `url` query parameter.
fn build_request_url(endpoint: &str, video_url: &str) -> Result<String, ResolveError> {
    let mut parsed = url::Url::parse(endpoint)?;
    parsed.query_pairs_mut().append_pair("url", video_url);
    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_targets_gateway() {
        let api = RemoteApi::default();
        assert_eq!(
            api.endpoint,
            "https://social-media-video-downloader.p.rapidapi.com/smvd/get/all"
        );
        assert_eq!(api.host_header, API_HOST);
    }

    #[test]
    fn at_base_keeps_standard_path() {
        let api = RemoteApi::at_base("http://127.0.0.1:4096/");
        assert_eq!(api.endpoint, "http://127.0.0.1:4096/smvd/get/all");
        assert_eq!(api.host_header, API_HOST);
    }

    #[test]
    fn request_url_percent_encodes_target() {
        let out = build_request_url(
            "https://social-media-video-downloader.p.rapidapi.com/smvd/get/all",
            "https://www.instagram.com/reel/ABC?x=1&y=2",
        )
        .unwrap();
        assert!(out.contains("url=https%3A%2F%2Fwww.instagram.com%2Freel%2FABC%3Fx%3D1%26y%3D2"));
        assert!(!out.contains("url=https://"));
    }

    #[test]
    fn bad_endpoint_is_a_remote_api_error() {
        let err = build_request_url("not a url", "https://x").unwrap_err();
        assert!(matches!(err, ResolveError::RemoteApi { .. }));
    }
}
