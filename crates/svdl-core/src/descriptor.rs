//! The resolved-video descriptor returned by every successful resolution.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Everything a caller needs to present and download a resolved video.
///
/// Both resolution modes produce the same shape; `demo` records which mode
/// minted it. All string fields are plain display text except
/// `thumbnail_url` and `download_url`, which are fetchable URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub platform: Platform,
    pub thumbnail_url: String,
    pub download_url: String,
    #[serde(default)]
    pub duration: Option<String>,
    /// True when the descriptor came from demo mode rather than the remote API.
    pub demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoDescriptor {
        VideoDescriptor {
            title: "Instagram Post (Cxy_12-a...)".into(),
            author: "Unknown User (Private)".into(),
            description: "Ready to download. Original metadata is hidden due to privacy settings."
                .into(),
            hashtags: vec!["video".into(), "social".into(), "download".into()],
            platform: Platform::Instagram,
            thumbnail_url: "https://picsum.photos/seed/Cxy_12-ab/600/400".into(),
            download_url: "https://example.com/video.mp4".into(),
            duration: None,
            demo: true,
        }
    }

    #[test]
    fn serde_roundtrip() {
        let d = sample();
        let json = serde_json::to_string(&d).unwrap();
        let back: VideoDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn optional_fields_default() {
        // Descriptors serialized by older builds may lack the supplementary
        // fields; they deserialize to their empty values.
        let json = r#"{
            "title": "Facebook Video",
            "author": "Unknown User",
            "description": "",
            "platform": "Facebook",
            "thumbnail_url": "https://picsum.photos/seed/social/600/400",
            "download_url": "https://example.com/v.mp4",
            "demo": false
        }"#;
        let d: VideoDescriptor = serde_json::from_str(json).unwrap();
        assert!(d.hashtags.is_empty());
        assert_eq!(d.duration, None);
        assert_eq!(d.platform, Platform::Facebook);
    }
}
