//! Capability kinds, requests and policy decisions.
//!
//! A capability is a sensitive operation an extension may attempt:
//! fetching a resource, controlling windows, capturing media, reading
//! the clipboard, or showing notifications. The negotiator produces
//! one [`PolicyDecision`] per request.

use serde::{Deserialize, Serialize};

/// The sensitive operations gated by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// Load an extension referenced by a project file.
    LoadExtensionFromProject,
    /// Fetch a remote resource.
    FetchResource,
    /// Open a new window or tab.
    OpenWindow,
    /// Navigate the current tab.
    RedirectTab,
    /// Record audio from the microphone.
    RecordAudio,
    /// Record video from the camera.
    RecordVideo,
    /// Read the clipboard without user interaction.
    ReadClipboard,
    /// Show notifications.
    Notify,
}

/// A concrete capability request, pairing a kind with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityRequest {
    /// Load the extension at `url`, as referenced by a project file.
    LoadExtensionFromProject {
        /// URL of the extension source.
        url: String,
    },

    /// Fetch the resource at `url`.
    FetchResource {
        /// URL of the resource.
        url: String,
    },

    /// Open a new window or tab at `url`.
    OpenWindow {
        /// Destination URL.
        url: String,
    },

    /// Navigate the current tab to `url`.
    RedirectTab {
        /// Destination URL.
        url: String,
    },

    /// Record audio from the user's microphone.
    RecordAudio,

    /// Record video from the user's camera.
    RecordVideo,

    /// Read values from the user's clipboard.
    ReadClipboard,

    /// Show a notification.
    Notify,
}

impl CapabilityRequest {
    /// The kind of capability this request exercises.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Self::LoadExtensionFromProject { .. } => CapabilityKind::LoadExtensionFromProject,
            Self::FetchResource { .. } => CapabilityKind::FetchResource,
            Self::OpenWindow { .. } => CapabilityKind::OpenWindow,
            Self::RedirectTab { .. } => CapabilityKind::RedirectTab,
            Self::RecordAudio => CapabilityKind::RecordAudio,
            Self::RecordVideo => CapabilityKind::RecordVideo,
            Self::ReadClipboard => CapabilityKind::ReadClipboard,
            Self::Notify => CapabilityKind::Notify,
        }
    }
}

/// The outcome of a capability decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The operation may proceed. Granting does not guarantee the
    /// underlying platform permission will also succeed.
    Allow,
    /// The operation must not proceed.
    Deny,
}

impl Outcome {
    /// Whether this outcome permits the operation.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Outcome {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// The record produced for a single capability request.
///
/// Decisions are not persisted; the only durable side effect of a
/// decision is the consent cache entry an approved fetch leaves
/// behind for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDecision {
    /// The capability that was requested.
    pub kind: CapabilityKind,
    /// The verdict.
    pub outcome: Outcome,
}

impl PolicyDecision {
    /// Whether the request was allowed.
    pub fn allowed(&self) -> bool {
        self.outcome.is_allowed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_mapping() {
        let request = CapabilityRequest::FetchResource {
            url: "https://example.com/sprite.png".to_string(),
        };
        assert_eq!(request.kind(), CapabilityKind::FetchResource);
        assert_eq!(CapabilityRequest::Notify.kind(), CapabilityKind::Notify);
    }

    #[test]
    fn outcome_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Allow);
        assert_eq!(Outcome::from(false), Outcome::Deny);
        assert!(Outcome::Allow.is_allowed());
        assert!(!Outcome::Deny.is_allowed());
    }

    #[test]
    fn decision_reports_outcome() {
        let decision = PolicyDecision {
            kind: CapabilityKind::OpenWindow,
            outcome: Outcome::Deny,
        };
        assert!(!decision.allowed());
    }
}
