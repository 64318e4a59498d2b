//! Resolution error taxonomy.

use thiserror::Error;

/// Why a resolution attempt failed.
///
/// Auth rejections are split out from other remote failures so callers can
/// tell "fix your credential" apart from "the service misbehaved". A remote
/// failure is terminal for the attempt; the resolver never silently retries
/// it in demo mode.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported platform: provide a Facebook or Instagram video URL")]
    UnsupportedPlatform,

    #[error("API credential rejected (HTTP {status}): check or renew the configured key")]
    RemoteAuth { status: u32 },

    #[error("remote resolution failed: {reason}")]
    RemoteApi { reason: String },
}

impl From<curl::Error> for ResolveError {
    fn from(e: curl::Error) -> Self {
        ResolveError::RemoteApi {
            reason: format!("request failed: {}", e),
        }
    }
}

impl From<url::ParseError> for ResolveError {
    fn from(e: url::ParseError) -> Self {
        ResolveError::RemoteApi {
            reason: format!("invalid endpoint: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let e = ResolveError::UnsupportedPlatform;
        assert!(e.to_string().contains("Facebook or Instagram"));

        let e = ResolveError::RemoteAuth { status: 403 };
        assert!(e.to_string().contains("403"));
        assert!(e.to_string().contains("credential"));

        let e = ResolveError::RemoteApi {
            reason: "HTTP 500".into(),
        };
        assert!(e.to_string().contains("HTTP 500"));
    }
}
