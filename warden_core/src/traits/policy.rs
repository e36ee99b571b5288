//! The security policy contract consumed by a host runtime.

use async_trait::async_trait;

use crate::types::SandboxMode;

/// Decision points for extension trust and capability access.
///
/// This is the complete surface a host runtime consults: one sandbox
/// mode selector plus eight capability checks. The default engine in
/// `warden_policy` implements all of them and additionally lets each
/// one be replaced at runtime; a host with entirely bespoke rules can
/// instead implement this trait directly.
///
/// Every check resolves to a boolean. A denied or dismissed prompt is
/// an ordinary `false`, never an error, and malformed input degrades
/// to the most restrictive outcome.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use warden_core::traits::SecurityPolicy;
/// use warden_core::types::SandboxMode;
///
/// /// Trusts a single origin and denies everything interactive.
/// struct LockedDown;
///
/// #[async_trait]
/// impl SecurityPolicy for LockedDown {
///     fn select_sandbox_mode(&self, extension_url: &str) -> SandboxMode {
///         if extension_url.starts_with("https://extensions.example.com/") {
///             SandboxMode::Unsandboxed
///         } else {
///             SandboxMode::Iframe
///         }
///     }
///
///     async fn can_load_extension_from_project(&self, _url: &str) -> bool {
///         false
///     }
///
///     async fn can_fetch(&self, resource_url: &str) -> bool {
///         resource_url.starts_with("https://extensions.example.com/")
///     }
///
///     async fn can_open_window(&self, _url: &str) -> bool {
///         false
///     }
///
///     async fn can_redirect_tab(&self, _url: &str) -> bool {
///         false
///     }
///
///     async fn can_record_audio(&self) -> bool {
///         false
///     }
///
///     async fn can_record_video(&self) -> bool {
///         false
///     }
///
///     async fn can_read_clipboard(&self) -> bool {
///         false
///     }
///
///     async fn can_notify(&self) -> bool {
///         false
///     }
/// }
/// ```
#[async_trait]
pub trait SecurityPolicy: Send + Sync {
    /// Determine the type of sandbox to use for an extension.
    ///
    /// The host spawns the execution context; this only recommends
    /// the isolation level.
    fn select_sandbox_mode(&self, extension_url: &str) -> SandboxMode;

    /// Determine whether an extension stored inside a project may be
    /// loaded. Implementations typically confirm with the user before
    /// resolving for anything that is not auto-trusted.
    async fn can_load_extension_from_project(&self, extension_url: &str) -> bool;

    /// Determine whether an extension may fetch a remote resource.
    ///
    /// This only applies to unsandboxed extensions that go through
    /// the host's fetch APIs; sandboxed extensions never reach this
    /// check because the host does not route their requests here.
    async fn can_fetch(&self, resource_url: &str) -> bool;

    /// Determine whether an extension may open a new window or tab.
    /// Sandboxed extensions are unable to open windows at all.
    async fn can_open_window(&self, website_url: &str) -> bool;

    /// Determine whether an extension may navigate the current tab.
    /// Sandboxed extensions can only redirect their own sandboxed
    /// window.
    async fn can_redirect_tab(&self, website_url: &str) -> bool;

    /// Determine whether an extension may record audio from the
    /// user's microphone. Even when this returns `true`, the platform
    /// permission system may still refuse.
    async fn can_record_audio(&self) -> bool;

    /// Determine whether an extension may record video from the
    /// user's camera. Even when this returns `true`, the platform
    /// permission system may still refuse.
    async fn can_record_video(&self) -> bool;

    /// Determine whether an extension may read the user's clipboard
    /// without interaction. Success is not guaranteed even when
    /// allowed.
    async fn can_read_clipboard(&self) -> bool;

    /// Determine whether an extension may show notifications.
    /// Success is not guaranteed even when allowed.
    async fn can_notify(&self) -> bool;
}
