//! `svdl history` – show recent resolutions.

use anyhow::Result;
use svdl_core::history::HistoryDb;

pub async fn run_history(db: &HistoryDb, limit: usize) -> Result<()> {
    let entries = db.recent(limit).await?;
    if entries.is_empty() {
        println!("No resolutions recorded.");
    } else {
        println!(
            "{:<6} {:<10} {:<7} {:<32} {}",
            "ID", "PLATFORM", "MODE", "TITLE", "URL"
        );
        for e in entries {
            let mode = if e.demo { "demo" } else { "remote" };
            println!(
                "{:<6} {:<10} {:<7} {:<32} {}",
                e.id,
                e.platform.as_str(),
                mode,
                e.title,
                e.url
            );
        }
    }
    Ok(())
}
