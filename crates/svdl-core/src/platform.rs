//! Platform classification for social-video URLs.
//!
//! Maps a raw URL string to the closed set of supported platforms via
//! substring tests. `Unknown` is a rejection sentinel: resolution refuses it
//! up front, and it never appears in a resolved descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a video URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Facebook,
    Unknown,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Instagram" => Platform::Instagram,
            "Facebook" => Platform::Facebook,
            _ => Platform::Unknown,
        }
    }

    /// True for platforms the resolver accepts.
    pub fn is_supported(self) -> bool {
        !matches!(self, Platform::Unknown)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a URL by substring match.
///
/// Total and pure: every string maps to exactly one variant, with no failure
/// mode. The Instagram test runs before the Facebook test, so a pathological
/// URL containing both `instagram.com` and `facebook.com` classifies as
/// Instagram. Matching is case-sensitive.
pub fn classify(url: &str) -> Platform {
    if url.contains("instagram.com") {
        return Platform::Instagram;
    }
    if url.contains("facebook.com") || url.contains("fb.watch") {
        return Platform::Facebook;
    }
    Platform::Unknown
}
