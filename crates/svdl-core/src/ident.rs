//! Best-effort extraction of a content ident from a social-video URL.
//!
//! The ident is cosmetic: it seeds demo-mode titles and thumbnail URLs, so a
//! miss degrades presentation but never correctness. Extraction scans for
//! platform path markers and takes the identifier run that follows the
//! earliest one.

use crate::platform::Platform;
use std::time::{SystemTime, UNIX_EPOCH};

/// Path markers that precede an Instagram content ident.
const INSTAGRAM_MARKERS: &[&str] = &["/p/", "/reel/", "/tv/"];

/// Path markers that precede a Facebook content ident.
const FACEBOOK_MARKERS: &[&str] = &["/videos/", "watch?v=", "fb.watch/", "/reel/"];

/// Extracts the content ident following the earliest platform marker.
///
/// Returns `None` when no marker occurs in the URL, when a non-ident
/// character immediately follows every marker, or for `Platform::Unknown`.
pub fn extract_id(platform: Platform, url: &str) -> Option<String> {
    let markers = match platform {
        Platform::Instagram => INSTAGRAM_MARKERS,
        Platform::Facebook => FACEBOOK_MARKERS,
        Platform::Unknown => return None,
    };

    let mut best: Option<(usize, String)> = None;
    for marker in markers {
        for (pos, _) in url.match_indices(marker) {
            let id = id_run(&url[pos + marker.len()..]);
            if id.is_empty() {
                continue;
            }
            match &best {
                Some((at, _)) if *at <= pos => {}
                _ => best = Some((pos, id)),
            }
        }
    }
    best.map(|(_, id)| id)
}

/// Longest leading run of ident characters: ASCII alphanumerics, `_`, `-`.
fn id_run(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Fabricates an ident when the URL yields none.
///
/// Combines a short platform prefix with the current time in hex millis, so
/// repeated demo resolutions of an opaque URL still get distinct thumbnails.
pub fn synthetic_id(platform: Platform) -> String {
    let prefix = match platform {
        Platform::Facebook => "fb",
        _ => "insta",
    };
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{:x}", prefix, millis)
}
