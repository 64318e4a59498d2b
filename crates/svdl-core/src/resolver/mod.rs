//! URL-to-descriptor resolution.
//!
//! The single entry point is [`resolve`]. Mode selection is driven entirely
//! by the credential: a usable API key routes the attempt to the remote
//! gateway, anything else synthesizes a demo descriptor locally. A failed
//! remote attempt surfaces its error as-is; it never falls back to demo
//! output, so a descriptor with `demo: false` always reflects real gateway
//! data.

mod demo;
mod remote;

pub use demo::SAMPLE_VIDEO_URL;
pub use remote::FALLBACK_THUMBNAIL;

use crate::descriptor::VideoDescriptor;
use crate::error::ResolveError;
use crate::platform;
use crate::remote_api::RemoteApi;
use std::time::Duration;

/// Credentials at or below this many chars are treated as absent.
///
/// Real gateway keys run dozens of characters; anything this short is a
/// placeholder like `demo` or an empty string from an unset config field.
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// Pause inserted before a demo descriptor is returned.
pub const DEMO_DELAY: Duration = Duration::from_millis(800);

/// Knobs for a resolution attempt.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// API credential, if any. Gates remote mode.
    pub credential: Option<String>,
    /// Gateway to resolve against in remote mode.
    pub api: RemoteApi,
    /// Demo-mode pause. Tests shrink this to keep suites fast.
    pub demo_delay: Duration,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            credential: None,
            api: RemoteApi::default(),
            demo_delay: DEMO_DELAY,
        }
    }
}

impl ResolveOptions {
    pub fn with_credential(credential: Option<String>) -> Self {
        ResolveOptions {
            credential,
            ..ResolveOptions::default()
        }
    }

    /// The credential, if it passes the length gate.
    fn usable_credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .filter(|c| c.chars().count() > MIN_CREDENTIAL_LEN)
    }
}

/// Resolves a video URL to a downloadable descriptor.
///
/// Classifies the URL first and rejects unsupported platforms before any
/// network traffic or delay. Returns [`ResolveError::UnsupportedPlatform`]
/// for URLs that match neither platform; remote-mode failures map to
/// [`ResolveError::RemoteAuth`] or [`ResolveError::RemoteApi`]. Demo mode
/// is infallible past the platform check.
pub async fn resolve(url: &str, opts: &ResolveOptions) -> Result<VideoDescriptor, ResolveError> {
    let platform = platform::classify(url);
    if !platform.is_supported() {
        return Err(ResolveError::UnsupportedPlatform);
    }

    match opts.usable_credential() {
        Some(credential) => {
            tracing::debug!(%platform, url, "resolving via remote API");
            remote::resolve_remote(&opts.api, url, credential, platform).await
        }
        None => {
            tracing::debug!(%platform, url, "resolving in demo mode");
            Ok(demo::resolve_demo(url, platform, opts.demo_delay).await)
        }
    }
}
