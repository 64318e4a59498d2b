//! `svdl clear-history` – delete all recorded resolutions.

use anyhow::Result;
use svdl_core::history::HistoryDb;

pub async fn run_clear_history(db: &HistoryDb) -> Result<()> {
    let removed = db.clear().await?;
    println!("Removed {removed} history entries.");
    Ok(())
}
