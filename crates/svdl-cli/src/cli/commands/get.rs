//! `svdl get <url>` – resolve a video URL and download the video file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use svdl_core::checksum;
use svdl_core::config::SvdlConfig;
use svdl_core::fetch;
use svdl_core::history::HistoryDb;

use super::resolve::resolve_and_record;

/// Resolves, then delivers the chosen link to disk and prints its digest.
/// `output` wins over `download_dir`; without either the file lands in the
/// config download dir or the current directory, named after the title.
pub async fn run_get(
    db: &HistoryDb,
    cfg: &SvdlConfig,
    url: &str,
    api_key: Option<String>,
    output: Option<PathBuf>,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let descriptor = resolve_and_record(db, cfg, url, api_key).await?;
    println!("Resolved: {} [{}]", descriptor.title, descriptor.platform);

    let dest = match output {
        Some(path) => path,
        None => {
            let dir = match download_dir.or_else(|| cfg.download_dir.clone()) {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            dir.join(fetch::filename_for_title(&descriptor.title))
        }
    };

    let written = fetch::download_to_file_async(descriptor.download_url.clone(), dest.clone())
        .await
        .with_context(|| format!("downloading {}", descriptor.download_url))?;
    let digest = checksum::sha256_path(&dest)?;

    println!("Saved {} bytes to {}", written, dest.display());
    println!("{}  {}", digest, dest.display());
    Ok(())
}
