//! Error types for the Warden security engine.
//!
//! The engine is fail-closed: every decision path terminates in a
//! boolean outcome or a sandbox mode, never in an error surfaced to
//! the host. These types exist at the edges. URL validation reports
//! why a candidate string was rejected, and consent providers report
//! delivery failures; both degrade to Deny before reaching a caller.

use thiserror::Error;

/// Root error type for the Warden crates.
#[derive(Debug, Error)]
pub enum Error {
    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Consent error: {0}")]
    Consent(#[from] ConsentError),
}

/// Errors from URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The candidate string could not be parsed as a URL at all.
    #[error("unparseable URL: {0}")]
    Unparseable(String),

    /// The URL parsed, but its scheme is outside the allowlist.
    /// Script-execution schemes such as `javascript:` land here.
    #[error("disallowed scheme: {0}")]
    DisallowedScheme(String),
}

/// Errors from delivering a consent prompt to the user.
#[derive(Debug, Error)]
pub enum ConsentError {
    /// The provider can no longer deliver prompts, for example when
    /// the UI side of a channel provider has been dropped.
    #[error("consent provider unavailable: {0}")]
    Unavailable(String),
}
