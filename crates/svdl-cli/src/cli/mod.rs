//! CLI for the svdl social video downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use svdl_core::config;
use svdl_core::history::HistoryDb;

use commands::{
    run_checksum, run_clear_history, run_detect, run_get, run_history, run_resolve,
};

/// Top-level CLI for the svdl social video downloader.
#[derive(Debug, Parser)]
#[command(name = "svdl")]
#[command(about = "svdl: resolve and download Facebook/Instagram videos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a video URL and print its metadata.
    Resolve {
        /// Facebook or Instagram video URL.
        url: String,

        /// API key for remote resolution (overrides the config file).
        #[arg(long)]
        api_key: Option<String>,

        /// Print the full descriptor as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a video URL and download the video file.
    Get {
        /// Facebook or Instagram video URL.
        url: String,

        /// API key for remote resolution (overrides the config file).
        #[arg(long)]
        api_key: Option<String>,

        /// Exact output path (skips the title-derived filename).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory for the title-derived file (default: config, then cwd).
        #[arg(long)]
        download_dir: Option<PathBuf>,
    },

    /// Show which platform a URL belongs to, without resolving it.
    Detect {
        /// URL to classify.
        url: String,
    },

    /// Show recent resolutions, newest first.
    History {
        /// Maximum entries to show.
        #[arg(long, default_value = "20", value_name = "N")]
        limit: usize,
    },

    /// Delete all recorded resolutions.
    ClearHistory,

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = HistoryDb::open_default().await?;

        match cli.command {
            CliCommand::Resolve { url, api_key, json } => {
                run_resolve(&db, &cfg, &url, api_key, json).await?
            }
            CliCommand::Get {
                url,
                api_key,
                output,
                download_dir,
            } => run_get(&db, &cfg, &url, api_key, output, download_dir).await?,
            CliCommand::Detect { url } => run_detect(&url).await?,
            CliCommand::History { limit } => run_history(&db, limit).await?,
            CliCommand::ClearHistory => run_clear_history(&db).await?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
