//! Sandbox modes for loaded extension code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The isolation level applied to loaded extension code.
///
/// The engine only ever recommends a mode; constructing the actual
/// execution context is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SandboxMode {
    /// No isolation. Extension code runs with the host's full default
    /// capability grants. Reserved for auto-trusted sources.
    Unsandboxed,

    /// Dedicated worker isolation. Not reachable through the default
    /// policy; hosts may select it from a custom mode selector.
    Worker,

    /// Isolated frame. The code cannot open or redirect windows, and
    /// the host never routes its capability requests through the
    /// negotiator. Default for everything that is not auto-trusted.
    Iframe,
}

impl SandboxMode {
    /// The identifier used when talking to the host about this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsandboxed => "unsandboxed",
            Self::Worker => "worker",
            Self::Iframe => "iframe",
        }
    }

    /// Whether this mode applies any isolation at all.
    pub fn is_isolated(&self) -> bool {
        !matches!(self, Self::Unsandboxed)
    }
}

impl fmt::Display for SandboxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_identifiers_are_stable() {
        assert_eq!(SandboxMode::Unsandboxed.as_str(), "unsandboxed");
        assert_eq!(SandboxMode::Worker.as_str(), "worker");
        assert_eq!(SandboxMode::Iframe.as_str(), "iframe");
    }

    #[test]
    fn only_unsandboxed_is_unisolated() {
        assert!(!SandboxMode::Unsandboxed.is_isolated());
        assert!(SandboxMode::Worker.is_isolated());
        assert!(SandboxMode::Iframe.is_isolated());
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&SandboxMode::Iframe).unwrap();
        assert_eq!(json, "\"iframe\"");
        let back: SandboxMode = serde_json::from_str("\"unsandboxed\"").unwrap();
        assert_eq!(back, SandboxMode::Unsandboxed);
    }
}
