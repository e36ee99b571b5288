//! Trust classification for extension and resource URLs.
//!
//! Two independent allowlists govern trust. The auto-trusted prefix
//! set gates code-execution privilege: extensions from these origins
//! load automatically and without a sandbox. The fetch-trusted origin
//! set gates only outbound network access for unsandboxed extensions.
//! An origin may satisfy one, both, or neither.

use warden_core::types::{SandboxMode, TrustTier};

use crate::config::PolicyConfig;
use crate::url::{ExtensionSource, ValidatedUrl};

/// URL prefixes whose extensions load automatically and without a
/// sandbox. Deliberately small: this is the highest-privilege path.
pub const AUTO_TRUSTED_PREFIXES: &[&str] = &[
    "https://extensions.turbowarp.org/",
    "http://localhost:8000/",
];

/// Exact origins always trusted for outbound fetches.
const FETCH_TRUSTED_ORIGINS: &[&str] = &[
    // Any TurboWarp service such as trampoline
    "https://turbowarp.org",
    // GitHub
    "https://raw.githubusercontent.com",
    "https://api.github.com",
    // GitLab
    "https://gitlab.com",
    // GameJolt
    "https://api.gamejolt.com",
    // httpbin
    "https://httpbin.org",
    // ScratchDB
    "https://scratchdb.lefty.one",
];

/// Subdomain families always trusted for outbound fetches. An origin
/// matches if it ends with one of these suffixes.
///
/// The matches don't need to be perfect. If an extension tries to
/// fetch from, say, a GitHub Pages domain that isn't an actual
/// username, it just gets a network error.
const FETCH_TRUSTED_SUFFIXES: &[&str] = &[
    ".turbowarp.org",
    ".turbowarp.xyz",
    ".github.io",
    ".gitlab.io",
    ".bitbucket.io",
    ".itch.io",
];

/// True iff `url` may be loaded automatically and unsandboxed under
/// the builtin lists.
pub fn is_auto_trusted(url: &str) -> bool {
    AUTO_TRUSTED_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// True iff the origin of `url` belongs to the builtin set of origins
/// to always trust fetching from.
pub fn is_fetch_trusted(url: &ValidatedUrl) -> bool {
    // If we would trust loading an extension from here, we can trust
    // loading resources too.
    if is_auto_trusted(url.as_str()) {
        return true;
    }
    origin_is_fetch_trusted(&url.origin())
}

fn origin_is_fetch_trusted(origin: &str) -> bool {
    FETCH_TRUSTED_ORIGINS.contains(&origin)
        || FETCH_TRUSTED_SUFFIXES.iter().any(|suffix| origin.ends_with(suffix))
}

/// Classify an extension source against the builtin allowlists.
pub fn classify(source: &ExtensionSource) -> TrustTier {
    TrustPolicy::default().classify(source)
}

/// The builtin trust lists plus host-configured extensions.
///
/// Hosts that operate their own extension gallery or API endpoints
/// extend the lists through [`PolicyConfig`] instead of replacing the
/// decision methods wholesale.
#[derive(Debug, Clone, Default)]
pub struct TrustPolicy {
    extra_auto_prefixes: Vec<String>,
    extra_fetch_origins: Vec<String>,
    extra_fetch_suffixes: Vec<String>,
}

impl TrustPolicy {
    /// Build a trust policy from host configuration.
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            extra_auto_prefixes: config.auto_trusted_prefixes.clone(),
            extra_fetch_origins: config.fetch_trusted_origins.clone(),
            extra_fetch_suffixes: config.fetch_trusted_suffixes.clone(),
        }
    }

    /// True iff `url` may be loaded automatically and unsandboxed.
    pub fn is_auto_trusted(&self, url: &str) -> bool {
        is_auto_trusted(url)
            || self.extra_auto_prefixes.iter().any(|prefix| url.starts_with(prefix))
    }

    /// True iff the origin of `url` is always trusted for fetching.
    pub fn is_fetch_trusted(&self, url: &ValidatedUrl) -> bool {
        if self.is_auto_trusted(url.as_str()) {
            return true;
        }
        let origin = url.origin();
        origin_is_fetch_trusted(&origin)
            || self.extra_fetch_origins.iter().any(|o| origin == *o)
            || self.extra_fetch_suffixes.iter().any(|suffix| origin.ends_with(suffix))
    }

    /// Classify an extension source. Invalidity dominates trust: a
    /// source that failed URL validation is always untrusted.
    pub fn classify(&self, source: &ExtensionSource) -> TrustTier {
        if !source.is_valid() {
            return TrustTier::Untrusted;
        }
        if self.is_auto_trusted(source.raw_url()) {
            return TrustTier::AutoTrusted;
        }
        match ValidatedUrl::parse(source.raw_url()) {
            Ok(url) if self.is_fetch_trusted(&url) => TrustTier::FetchTrusted,
            _ => TrustTier::Untrusted,
        }
    }

    /// Select the isolation level for an extension URL: auto-trusted
    /// sources run unsandboxed, everything else in an iframe.
    pub fn select_sandbox_mode(&self, extension_url: &str) -> SandboxMode {
        match self.classify(&ExtensionSource::new(extension_url)) {
            TrustTier::AutoTrusted => SandboxMode::Unsandboxed,
            _ => SandboxMode::Iframe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(raw: &str) -> ValidatedUrl {
        ValidatedUrl::parse(raw).unwrap()
    }

    #[test]
    fn operator_origins_are_auto_trusted() {
        assert!(is_auto_trusted("https://extensions.turbowarp.org/fetch.js"));
        assert!(is_auto_trusted("http://localhost:8000/my-extension.js"));
    }

    #[test]
    fn other_origins_are_not_auto_trusted() {
        assert!(!is_auto_trusted("https://evil.example/foo.js"));
        assert!(!is_auto_trusted("https://turbowarp.org/editor"));
        // Prefix matching is exact; a lookalike path does not help.
        assert!(!is_auto_trusted("https://evil.example/https://extensions.turbowarp.org/"));
    }

    #[test]
    fn exact_fetch_trusted_origins() {
        for raw in [
            "https://turbowarp.org/trampoline/x",
            "https://raw.githubusercontent.com/user/repo/main/ext.js",
            "https://api.github.com/repos/user/repo",
            "https://gitlab.com/user/project",
            "https://api.gamejolt.com/api/game/v1",
            "https://httpbin.org/get",
            "https://scratchdb.lefty.one/v3/user/info",
        ] {
            assert!(is_fetch_trusted(&validated(raw)), "{raw} should be fetch-trusted");
        }
    }

    #[test]
    fn subdomain_suffixes_are_fetch_trusted() {
        for raw in [
            "https://trampoline.turbowarp.org/proxy",
            "https://cdn.turbowarp.xyz/assets",
            "https://someone.github.io/extension/",
            "https://someone.gitlab.io/page",
            "https://someone.bitbucket.io/page",
            "https://someone.itch.io/game",
        ] {
            assert!(is_fetch_trusted(&validated(raw)), "{raw} should be fetch-trusted");
        }
    }

    #[test]
    fn suffix_matching_requires_a_dot_boundary() {
        // evilgithub.io ends with "github.io" but not ".github.io".
        assert!(!is_fetch_trusted(&validated("https://evilgithub.io/x")));
        assert!(!is_fetch_trusted(&validated("https://github.io.evil.example/x")));
    }

    #[test]
    fn unknown_origins_are_not_fetch_trusted() {
        assert!(!is_fetch_trusted(&validated("https://unknown.example/x")));
        assert!(!is_fetch_trusted(&validated("https://github.com/user/repo")));
    }

    #[test]
    fn auto_trusted_urls_are_also_fetch_trusted() {
        assert!(is_fetch_trusted(&validated("https://extensions.turbowarp.org/fetch.js")));
        assert!(is_fetch_trusted(&validated("http://localhost:8000/ext.js")));
    }

    #[test]
    fn classify_covers_all_tiers() {
        let auto = ExtensionSource::new("https://extensions.turbowarp.org/fetch.js");
        assert_eq!(classify(&auto), TrustTier::AutoTrusted);

        let fetch = ExtensionSource::new("https://someone.github.io/ext.js");
        assert_eq!(classify(&fetch), TrustTier::FetchTrusted);

        let untrusted = ExtensionSource::new("https://evil.example/ext.js");
        assert_eq!(classify(&untrusted), TrustTier::Untrusted);
    }

    #[test]
    fn invalidity_dominates_trust() {
        // Even a string prefixed like a trusted URL is untrusted if
        // it does not validate.
        let invalid = ExtensionSource::new("javascript:alert(1)");
        assert_eq!(classify(&invalid), TrustTier::Untrusted);
    }

    #[test]
    fn config_extends_the_builtin_lists() {
        let config = PolicyConfig {
            auto_trusted_prefixes: vec!["https://gallery.example.com/".to_string()],
            fetch_trusted_origins: vec!["https://api.example.com".to_string()],
            fetch_trusted_suffixes: vec![".cdn.example.com".to_string()],
            ..PolicyConfig::default()
        };
        let policy = TrustPolicy::from_config(&config);

        assert!(policy.is_auto_trusted("https://gallery.example.com/ext.js"));
        assert!(policy.is_fetch_trusted(&validated("https://api.example.com/v1")));
        assert!(policy.is_fetch_trusted(&validated("https://assets.cdn.example.com/x")));
        // Builtin lists still apply.
        assert!(policy.is_auto_trusted("https://extensions.turbowarp.org/fetch.js"));
        assert!(!policy.is_fetch_trusted(&validated("https://unknown.example/x")));
    }
}
