//! Host-supplied policy configuration.
//!
//! Configuration covers the choices a host makes once per session:
//! which fetch policy to run and which origins, beyond the builtin
//! lists, it operates itself. Everything here deserializes from TOML
//! so embedders can ship policy alongside the rest of their config.

use serde::{Deserialize, Serialize};

/// How `can_fetch` treats resource URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Allow every fetch without validation or prompting. This is
    /// the default, matching vanilla runtime behavior.
    #[default]
    Permissive,

    /// Validate the URL, consult the trust lists and the session
    /// consent cache, and prompt the user for anything unknown.
    Restrictive,
}

/// Configuration for a [`SecurityManager`].
///
/// [`SecurityManager`]: crate::manager::SecurityManager
///
/// # Examples
///
/// ```
/// use warden_policy::config::{FetchPolicy, PolicyConfig};
///
/// let config = PolicyConfig::from_toml_str(r#"
///     fetch_policy = "restrictive"
///     auto_trusted_prefixes = ["https://gallery.example.com/"]
///     fetch_trusted_origins = ["https://api.example.com"]
/// "#).unwrap();
///
/// assert_eq!(config.fetch_policy, FetchPolicy::Restrictive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Fetch decision mode.
    pub fetch_policy: FetchPolicy,

    /// Additional URL prefixes granted automatic, unsandboxed
    /// loading. Keep this list short; it is the highest-privilege
    /// grant the engine can hand out.
    pub auto_trusted_prefixes: Vec<String>,

    /// Additional exact origins always trusted for fetching.
    pub fetch_trusted_origins: Vec<String>,

    /// Additional origin suffixes (subdomain families, written with a
    /// leading dot) always trusted for fetching.
    pub fetch_trusted_suffixes: Vec<String>,
}

impl PolicyConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive_and_empty() {
        let config = PolicyConfig::default();
        assert_eq!(config.fetch_policy, FetchPolicy::Permissive);
        assert!(config.auto_trusted_prefixes.is_empty());
        assert!(config.fetch_trusted_origins.is_empty());
        assert!(config.fetch_trusted_suffixes.is_empty());
    }

    #[test]
    fn parses_full_toml() {
        let config = PolicyConfig::from_toml_str(
            r#"
            fetch_policy = "restrictive"
            auto_trusted_prefixes = ["https://gallery.example.com/"]
            fetch_trusted_origins = ["https://api.example.com"]
            fetch_trusted_suffixes = [".cdn.example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.fetch_policy, FetchPolicy::Restrictive);
        assert_eq!(config.auto_trusted_prefixes, ["https://gallery.example.com/"]);
        assert_eq!(config.fetch_trusted_origins, ["https://api.example.com"]);
        assert_eq!(config.fetch_trusted_suffixes, [".cdn.example.com"]);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PolicyConfig::from_toml_str("").unwrap();
        assert_eq!(config, PolicyConfig::default());
    }

    #[test]
    fn unknown_fetch_policy_is_rejected() {
        assert!(PolicyConfig::from_toml_str("fetch_policy = \"lenient\"").is_err());
    }
}
