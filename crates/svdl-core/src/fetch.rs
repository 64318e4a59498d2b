//! Single-stream HTTP GET delivery of a resolved download URL.
//!
//! Writes the response body sequentially to a local file. CDN URLs from
//! resolution are pre-signed direct links, so a plain GET with redirect
//! following is all the transfer needs.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads `url` to `dest` with a single GET. Returns the number of bytes
/// written. Any existing file at `dest` is truncated.
pub fn download_to_file(url: &str, dest: &Path) -> Result<u64> {
    let file = File::create(dest)
        .with_context(|| format!("cannot create {}", dest.display()))?;
    let mut writer = BufWriter::new(file);
    let mut written: u64 = 0;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match writer.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!("download write failed: {}", e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    writer.flush().context("flush failed")?;
    tracing::info!(bytes = written, dest = %dest.display(), "download complete");
    Ok(written)
}

/// Async wrapper over [`download_to_file`] using the blocking pool.
pub async fn download_to_file_async(url: String, dest: PathBuf) -> Result<u64> {
    tokio::task::spawn_blocking(move || download_to_file(&url, &dest))
        .await
        .context("download task failed")?
}

/// Derives a filesystem-safe `.mp4` filename from a descriptor title.
///
/// Lowercases the title and collapses every run of characters outside
/// `[a-z0-9]` into a single underscore, then trims leading and trailing
/// underscores. A title with no usable characters becomes `video.mp4`.
pub fn filename_for_title(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut gap = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !stem.is_empty() {
                stem.push('_');
            }
            gap = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    if stem.is_empty() {
        stem.push_str("video");
    }
    stem.truncate(120);
    stem.push_str(".mp4");
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_lowercase_underscored() {
        assert_eq!(
            filename_for_title("Instagram Post (ABC123xy...)"),
            "instagram_post_abc123xy.mp4"
        );
        assert_eq!(filename_for_title("Facebook Video"), "facebook_video.mp4");
    }

    #[test]
    fn punctuation_runs_collapse_to_one_underscore() {
        assert_eq!(filename_for_title("a - b -- c"), "a_b_c.mp4");
        assert_eq!(filename_for_title("  edge  "), "edge.mp4");
    }

    #[test]
    fn unusable_titles_fall_back() {
        assert_eq!(filename_for_title(""), "video.mp4");
        assert_eq!(filename_for_title("!!! ???"), "video.mp4");
    }

    #[test]
    fn long_titles_are_bounded() {
        let name = filename_for_title(&"x".repeat(500));
        assert_eq!(name.len(), 120 + ".mp4".len());
        assert!(name.ends_with(".mp4"));
    }
}
