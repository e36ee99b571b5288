//! Shared value types for the Warden security engine.

pub mod argument;
pub mod capability;
pub mod sandbox;
pub mod trust;

pub use argument::{ArgumentKind, UnknownArgumentKind};
pub use capability::{CapabilityKind, CapabilityRequest, Outcome, PolicyDecision};
pub use sandbox::SandboxMode;
pub use trust::TrustTier;
