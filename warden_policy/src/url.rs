//! URL validation for extension and resource URLs.
//!
//! Validation always runs before trust classification, window-open
//! and redirect decisions. It is fail-closed: a string that does not
//! parse, or that parses to a scheme outside the allowlist, is
//! invalid and can never classify above untrusted.

use url::Url;

use warden_core::error::UrlError;

/// Schemes accepted by the validator. Anything else, notably
/// script-execution schemes such as `javascript:`, is invalid.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "data", "blob"];

/// A URL that parsed successfully and uses an allowed scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    inner: Url,
}

impl ValidatedUrl {
    /// Parse and validate a candidate URL string.
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        let inner = Url::parse(raw).map_err(|_| UrlError::Unparseable(raw.to_string()))?;
        if !ALLOWED_SCHEMES.contains(&inner.scheme()) {
            return Err(UrlError::DisallowedScheme(inner.scheme().to_string()));
        }
        Ok(Self { inner })
    }

    /// The URL scheme, lowercased by the parser.
    pub fn scheme(&self) -> &str {
        self.inner.scheme()
    }

    /// `true` for `data:` and `blob:` URLs, which cannot reference a
    /// network-addressable origin. Fetches of these bypass trust
    /// classification entirely.
    pub fn is_local_data(&self) -> bool {
        matches!(self.scheme(), "data" | "blob")
    }

    /// The serialized origin, e.g. `https://example.com`.
    ///
    /// The parser lowercases hosts, so origin comparisons need no
    /// case folding. Opaque origins (`data:`, `blob:`) serialize as
    /// `null`.
    pub fn origin(&self) -> String {
        self.inner.origin().ascii_serialization()
    }

    /// The full serialized URL.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

/// The source of a single extension load attempt.
///
/// Created per attempt and discarded once a sandbox mode has been
/// selected. Construction never fails; an invalid URL simply yields a
/// source without an origin, which classifies as untrusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSource {
    raw_url: String,
    origin: Option<String>,
}

impl ExtensionSource {
    /// Capture a load attempt from a candidate URL string.
    pub fn new(raw_url: &str) -> Self {
        let origin = ValidatedUrl::parse(raw_url).ok().map(|url| url.origin());
        Self {
            raw_url: raw_url.to_string(),
            origin,
        }
    }

    /// The URL exactly as the host received it.
    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    /// The validated origin, if the URL passed validation.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Whether the URL passed validation.
    pub fn is_valid(&self) -> bool {
        self.origin.is_some()
    }
}
