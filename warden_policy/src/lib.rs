//! # Warden Policy
//!
//! `warden_policy` is the default security policy engine for host
//! runtimes that load executable extensions from arbitrary URLs. It
//! classifies how much an extension source is trusted, recommends an
//! isolation level for running its code, and negotiates access to
//! sensitive capabilities while the code runs.
//!
//! Key concepts:
//!
//! 1. **URL validation**: only a fixed scheme allowlist is ever
//!    considered; everything else is invalid and fails closed.
//!
//! 2. **Trust classification**: two independent allowlists, a narrow
//!    set of operator origins whose extensions load unsandboxed and
//!    a broader set of code-hosting origins trusted for fetching.
//!
//! 3. **Sandbox mode selection**: auto-trusted sources run
//!    unsandboxed, everything else in an isolated frame.
//!
//! 4. **Capability negotiation**: eight asynchronous decision points
//!    backed by a session-scoped consent cache and a pluggable
//!    consent prompt provider. Each decision point can be replaced
//!    individually at runtime.

pub mod config;
pub mod manager;
pub mod sandbox;
pub mod store;
pub mod trust;
pub mod url;

// Re-export key types and traits for convenience
pub use config::{FetchPolicy, PolicyConfig};
pub use manager::{PolicyOverrides, SecurityManager};
pub use sandbox::select_sandbox_mode;
pub use store::ConsentCache;
pub use trust::TrustPolicy;
pub use url::{ExtensionSource, ValidatedUrl, ALLOWED_SCHEMES};
pub use warden_core::traits::{ConsentProvider, SecurityPolicy};
