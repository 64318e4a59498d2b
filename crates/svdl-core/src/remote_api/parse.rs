//! Response body parsing and link selection.

use crate::error::ResolveError;
use serde::Deserialize;

/// Body of a successful metadata response.
///
/// Only the fields resolution consumes are modeled; the gateway sends more
/// and serde ignores the rest. Every field tolerates absence, since the
/// gateway omits what it cannot determine.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub links: Vec<ApiLink>,
}

/// One downloadable rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLink {
    #[serde(default)]
    pub quality: String,
    pub link: String,
}

/// Parses a response body, rejecting listings with no links.
pub fn parse_response(body: &[u8]) -> Result<ApiResponse, ResolveError> {
    let response: ApiResponse =
        serde_json::from_slice(body).map_err(|e| ResolveError::RemoteApi {
            reason: format!("unreadable response: {}", e),
        })?;
    if response.links.is_empty() {
        return Err(ResolveError::RemoteApi {
            reason: "response contained no download links".to_string(),
        });
    }
    Ok(response)
}

/// Picks the rendition to download.
///
/// Prefers the first link whose quality label mentions `hd` or `1080`
/// (ASCII case-insensitive), otherwise falls back to the first link.
pub fn select_link(links: &[ApiLink]) -> Option<&ApiLink> {
    links
        .iter()
        .find(|l| {
            let q = l.quality.to_ascii_lowercase();
            q.contains("hd") || q.contains("1080")
        })
        .or_else(|| links.first())
}
