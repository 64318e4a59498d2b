//! `svdl detect <url>` – classify a URL without resolving it.

use anyhow::Result;
use svdl_core::platform;

pub async fn run_detect(url: &str) -> Result<()> {
    println!("{}", platform::classify(url));
    Ok(())
}
