//! `svdl resolve <url>` – resolve a video URL and print its metadata.

use anyhow::{Context, Result};
use svdl_core::config::SvdlConfig;
use svdl_core::descriptor::VideoDescriptor;
use svdl_core::history::HistoryDb;
use svdl_core::resolver::{self, ResolveOptions};

/// Resolve `url` and record the outcome in history. Shared with `get`.
///
/// A key given on the command line wins over the config file. The history
/// write happens after a successful resolve only, then old rows are pruned
/// to the configured limit.
pub(super) async fn resolve_and_record(
    db: &HistoryDb,
    cfg: &SvdlConfig,
    url: &str,
    api_key: Option<String>,
) -> Result<VideoDescriptor> {
    let credential = api_key.or_else(|| cfg.api_key.clone());
    let opts = ResolveOptions::with_credential(credential);
    let descriptor = resolver::resolve(url, &opts).await?;

    db.add(url, &descriptor).await.context("recording history")?;
    db.prune(cfg.history_limit).await.context("pruning history")?;
    Ok(descriptor)
}

pub async fn run_resolve(
    db: &HistoryDb,
    cfg: &SvdlConfig,
    url: &str,
    api_key: Option<String>,
    json: bool,
) -> Result<()> {
    let descriptor = resolve_and_record(db, cfg, url, api_key).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print_summary(&descriptor);
    }
    Ok(())
}

fn print_summary(d: &VideoDescriptor) {
    println!("Platform:  {}", d.platform);
    println!("Title:     {}", d.title);
    println!("Author:    {}", d.author);
    if !d.description.is_empty() {
        println!("About:     {}", d.description);
    }
    if !d.hashtags.is_empty() {
        let tags: Vec<String> = d.hashtags.iter().map(|t| format!("#{t}")).collect();
        println!("Tags:      {}", tags.join(" "));
    }
    println!("Thumbnail: {}", d.thumbnail_url);
    println!("Download:  {}", d.download_url);
    println!("Mode:      {}", if d.demo { "demo" } else { "remote" });
}
