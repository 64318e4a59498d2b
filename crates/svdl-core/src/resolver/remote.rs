//! Remote-mode resolution: gateway response to descriptor.

use crate::descriptor::VideoDescriptor;
use crate::error::ResolveError;
use crate::platform::Platform;
use crate::remote_api::{self, RemoteApi};

/// Thumbnail used when the gateway response carries no picture.
pub const FALLBACK_THUMBNAIL: &str = "https://picsum.photos/seed/social/600/400";

/// Resolves through the gateway and maps the listing onto a descriptor.
pub async fn resolve_remote(
    api: &RemoteApi,
    url: &str,
    credential: &str,
    platform: Platform,
) -> Result<VideoDescriptor, ResolveError> {
    let response =
        remote_api::fetch_links_async(api.clone(), url.to_string(), credential.to_string()).await?;

    let chosen = remote_api::select_link(&response.links)
        .ok_or_else(|| ResolveError::RemoteApi {
            reason: "response contained no download links".to_string(),
        })?
        .clone();
    tracing::debug!(quality = %chosen.quality, "selected download link");

    // Present-but-empty strings get the same treatment as absent fields.
    let title = response
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("{} Video", platform));
    let thumbnail_url = response
        .picture
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string());

    Ok(VideoDescriptor {
        title,
        author: "Unknown User".to_string(),
        description: String::new(),
        hashtags: Vec::new(),
        platform,
        thumbnail_url,
        download_url: chosen.link,
        duration: None,
        demo: false,
    })
}
