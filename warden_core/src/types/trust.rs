//! Trust tiers for extension sources.

use serde::{Deserialize, Serialize};

/// Classification of an extension source against the two builtin
/// allowlists.
///
/// A tier is always derived from a source at the moment of a
/// decision; it is never stored standalone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustTier {
    /// Operator-controlled origin. Extensions load automatically and
    /// without a sandbox. This is the highest-privilege outcome and
    /// the set that grants it is deliberately small.
    AutoTrusted,

    /// Known code-hosting or API origin. Grants outbound fetch
    /// permission to unsandboxed extensions, nothing more.
    FetchTrusted,

    /// Everything else, including any URL that failed validation.
    Untrusted,
}

impl TrustTier {
    /// Whether this tier allows automatic, unsandboxed loading.
    pub fn is_auto_trusted(&self) -> bool {
        matches!(self, Self::AutoTrusted)
    }

    /// Whether this tier grants outbound fetch without consent.
    /// Auto-trust implies fetch trust.
    pub fn is_fetch_trusted(&self) -> bool {
        matches!(self, Self::AutoTrusted | Self::FetchTrusted)
    }
}
