//! Default sandbox-mode selection.

use warden_core::types::SandboxMode;

use crate::trust::TrustPolicy;

/// Select the isolation level for an extension URL under the default
/// policy.
///
/// Auto-trusted sources run unsandboxed with full default capability
/// grants; every other URL, including ones that fail validation, runs
/// in an iframe. Hosts customize this wholesale through
/// [`SecurityManager::set_sandbox_mode_selector`] or a custom
/// [`SecurityPolicy`] implementation.
///
/// [`SecurityManager::set_sandbox_mode_selector`]: crate::manager::SecurityManager::set_sandbox_mode_selector
/// [`SecurityPolicy`]: warden_core::traits::SecurityPolicy
pub fn select_sandbox_mode(extension_url: &str) -> SandboxMode {
    TrustPolicy::default().select_sandbox_mode(extension_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_sources_run_unsandboxed() {
        assert_eq!(
            select_sandbox_mode("https://extensions.turbowarp.org/foo.js"),
            SandboxMode::Unsandboxed
        );
        assert_eq!(
            select_sandbox_mode("http://localhost:8000/foo.js"),
            SandboxMode::Unsandboxed
        );
    }

    #[test]
    fn everything_else_runs_in_an_iframe() {
        assert_eq!(select_sandbox_mode("https://evil.example/foo.js"), SandboxMode::Iframe);
        assert_eq!(select_sandbox_mode("not a url"), SandboxMode::Iframe);
        assert_eq!(select_sandbox_mode("javascript:alert(1)"), SandboxMode::Iframe);
    }

    #[test]
    fn worker_is_never_selected_by_default() {
        for raw in [
            "https://extensions.turbowarp.org/foo.js",
            "https://evil.example/foo.js",
            "",
        ] {
            assert_ne!(select_sandbox_mode(raw), SandboxMode::Worker);
        }
    }
}
