//! Demo-mode resolution: synthesized descriptors, no network.

use crate::descriptor::VideoDescriptor;
use crate::ident;
use crate::platform::Platform;
use std::time::Duration;

/// Fixed download target for every demo descriptor. Publicly fetchable, so
/// the download path works end to end without a credential.
pub const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

const DEMO_AUTHOR: &str = "Unknown User (Private)";
const DEMO_DESCRIPTION: &str =
    "Ready to download. Original metadata is hidden due to privacy settings.";

/// Pauses to simulate a lookup, then synthesizes a descriptor.
pub async fn resolve_demo(url: &str, platform: Platform, delay: Duration) -> VideoDescriptor {
    tokio::time::sleep(delay).await;
    synthesize(url, platform)
}

/// Builds the demo descriptor. Pure; all variation comes from the ident.
fn synthesize(url: &str, platform: Platform) -> VideoDescriptor {
    let (id, titled) = match ident::extract_id(platform, url) {
        Some(id) => {
            let prefix = match platform {
                Platform::Facebook => "Facebook Video",
                _ => "Instagram Post",
            };
            let title = format!("{} ({}...)", prefix, head(&id, 8));
            (id, title)
        }
        None => {
            let title = match platform {
                Platform::Facebook => "Facebook Video",
                _ => "Instagram Video",
            };
            (ident::synthetic_id(platform), title.to_string())
        }
    };

    VideoDescriptor {
        title: titled,
        author: DEMO_AUTHOR.to_string(),
        description: DEMO_DESCRIPTION.to_string(),
        hashtags: vec!["video".to_string(), "social".to_string(), "download".to_string()],
        platform,
        thumbnail_url: format!("https://picsum.photos/seed/{}/600/400", id),
        download_url: SAMPLE_VIDEO_URL.to_string(),
        duration: None,
        demo: true,
    }
}

/// First `n` chars of `s`, respecting char boundaries.
fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
