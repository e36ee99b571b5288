//! # Warden Core
//!
//! Core types and traits for the Warden extension security engine.
//!
//! Warden decides how much a host runtime should trust dynamically
//! loaded third-party extension code, and arbitrates access to
//! sensitive capabilities at runtime. This crate defines the shared
//! vocabulary of that system:
//!
//! - The error hierarchy for URL validation and consent delivery
//! - Value types: trust tiers, sandbox modes, capability kinds and
//!   decisions, and the fixed argument-kind contract
//! - The [`SecurityPolicy`] trait consumed by host runtimes
//! - The [`ConsentProvider`] trait and ready-made providers
//!
//! `warden_core` deliberately contains no policy logic. The default
//! engine lives in the `warden_policy` crate; hosts that need fully
//! custom behavior implement [`SecurityPolicy`] directly.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items for convenience
pub use error::{ConsentError, Error, UrlError};
pub use traits::{ConsentProvider, ConsentRequest, SecurityPolicy};
pub use types::{
    ArgumentKind, CapabilityKind, CapabilityRequest, Outcome, PolicyDecision, SandboxMode,
    TrustTier,
};

/// A type alias for Result with our error types
pub type Result<T, E = error::Error> = std::result::Result<T, E>;
