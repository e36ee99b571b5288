//! Trait seams between the engine and its host.

pub mod consent;
pub mod policy;

pub use consent::{channel, AllowAll, ChannelConsentProvider, ConsentProvider, ConsentRequest, DenyAll};
pub use policy::SecurityPolicy;
