//! The capability negotiator.
//!
//! [`SecurityManager`] is the default [`SecurityPolicy`]
//! implementation. It consults the trust lists, the session consent
//! cache, and a [`ConsentProvider`] to answer the eight capability
//! checks, and lets a host replace any individual decision point at
//! runtime without touching the rest.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::BoxFuture;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use warden_core::traits::{ConsentProvider, SecurityPolicy};
use warden_core::types::{CapabilityRequest, Outcome, PolicyDecision, SandboxMode};

use crate::config::{FetchPolicy, PolicyConfig};
use crate::store::ConsentCache;
use crate::trust::TrustPolicy;
use crate::url::ValidatedUrl;

/// Replacement for the sandbox-mode selector.
pub type ModeSelector = Arc<dyn Fn(&str) -> SandboxMode + Send + Sync>;

/// Replacement for a URL-taking capability check.
pub type UrlCheck = Arc<dyn Fn(&str) -> BoxFuture<'static, bool> + Send + Sync>;

/// Replacement for a no-argument capability check.
pub type Gate = Arc<dyn Fn() -> BoxFuture<'static, bool> + Send + Sync>;

/// Runtime-replaceable decision points.
///
/// Any slot left empty falls through to the default policy. Slots
/// mirror the nine operations of [`SecurityPolicy`] one to one.
#[derive(Default)]
pub struct PolicyOverrides {
    /// Replaces [`SecurityPolicy::select_sandbox_mode`].
    pub select_sandbox_mode: Option<ModeSelector>,
    /// Replaces [`SecurityPolicy::can_load_extension_from_project`].
    pub can_load_extension_from_project: Option<UrlCheck>,
    /// Replaces [`SecurityPolicy::can_fetch`].
    pub can_fetch: Option<UrlCheck>,
    /// Replaces [`SecurityPolicy::can_open_window`].
    pub can_open_window: Option<UrlCheck>,
    /// Replaces [`SecurityPolicy::can_redirect_tab`].
    pub can_redirect_tab: Option<UrlCheck>,
    /// Replaces [`SecurityPolicy::can_record_audio`].
    pub can_record_audio: Option<Gate>,
    /// Replaces [`SecurityPolicy::can_record_video`].
    pub can_record_video: Option<Gate>,
    /// Replaces [`SecurityPolicy::can_read_clipboard`].
    pub can_read_clipboard: Option<Gate>,
    /// Replaces [`SecurityPolicy::can_notify`].
    pub can_notify: Option<Gate>,
}

/// The default security policy engine.
///
/// One manager serves one session. The consent cache it owns lives
/// exactly as long as the manager; discarding the manager discards
/// every trust decision the user made during the session.
pub struct SecurityManager {
    provider: Arc<dyn ConsentProvider>,
    trust: TrustPolicy,
    fetch_policy: FetchPolicy,
    approved_fetch_origins: ConsentCache,
    // Per-origin gates so concurrent fetch checks for one unapproved
    // origin produce a single prompt.
    pending_fetch_prompts: DashMap<String, Arc<Mutex<()>>>,
    overrides: RwLock<PolicyOverrides>,
}

impl SecurityManager {
    /// Create a manager with the default (permissive) configuration.
    pub fn new(provider: Arc<dyn ConsentProvider>) -> Self {
        Self::with_config(provider, PolicyConfig::default())
    }

    /// Create a manager from host configuration.
    pub fn with_config(provider: Arc<dyn ConsentProvider>, config: PolicyConfig) -> Self {
        Self {
            provider,
            trust: TrustPolicy::from_config(&config),
            fetch_policy: config.fetch_policy,
            approved_fetch_origins: ConsentCache::new(),
            pending_fetch_prompts: DashMap::new(),
            overrides: RwLock::new(PolicyOverrides::default()),
        }
    }

    /// The fetch policy this manager runs under.
    pub fn fetch_policy(&self) -> FetchPolicy {
        self.fetch_policy
    }

    /// The trust lists this manager consults.
    pub fn trust(&self) -> &TrustPolicy {
        &self.trust
    }

    /// The session consent cache.
    pub fn consent_cache(&self) -> &ConsentCache {
        &self.approved_fetch_origins
    }

    /// Route a capability request through the corresponding decision
    /// point and record the outcome.
    pub async fn decide(&self, request: &CapabilityRequest) -> PolicyDecision {
        let allowed = match request {
            CapabilityRequest::LoadExtensionFromProject { url } => {
                self.can_load_extension_from_project(url).await
            }
            CapabilityRequest::FetchResource { url } => self.can_fetch(url).await,
            CapabilityRequest::OpenWindow { url } => self.can_open_window(url).await,
            CapabilityRequest::RedirectTab { url } => self.can_redirect_tab(url).await,
            CapabilityRequest::RecordAudio => self.can_record_audio().await,
            CapabilityRequest::RecordVideo => self.can_record_video().await,
            CapabilityRequest::ReadClipboard => self.can_read_clipboard().await,
            CapabilityRequest::Notify => self.can_notify().await,
        };
        PolicyDecision {
            kind: request.kind(),
            outcome: Outcome::from(allowed),
        }
    }

    /// Replace the sandbox-mode selector.
    pub fn set_sandbox_mode_selector<F>(&self, selector: F)
    where
        F: Fn(&str) -> SandboxMode + Send + Sync + 'static,
    {
        self.overrides.write().select_sandbox_mode = Some(Arc::new(selector));
    }

    /// Replace the project-extension load check.
    pub fn set_can_load_extension_from_project<F>(&self, check: F)
    where
        F: Fn(&str) -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_load_extension_from_project = Some(Arc::new(check));
    }

    /// Replace the fetch check.
    pub fn set_can_fetch<F>(&self, check: F)
    where
        F: Fn(&str) -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_fetch = Some(Arc::new(check));
    }

    /// Replace the window-open check.
    pub fn set_can_open_window<F>(&self, check: F)
    where
        F: Fn(&str) -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_open_window = Some(Arc::new(check));
    }

    /// Replace the tab-redirect check.
    pub fn set_can_redirect_tab<F>(&self, check: F)
    where
        F: Fn(&str) -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_redirect_tab = Some(Arc::new(check));
    }

    /// Replace the audio-recording gate.
    pub fn set_can_record_audio<F>(&self, gate: F)
    where
        F: Fn() -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_record_audio = Some(Arc::new(gate));
    }

    /// Replace the video-recording gate.
    pub fn set_can_record_video<F>(&self, gate: F)
    where
        F: Fn() -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_record_video = Some(Arc::new(gate));
    }

    /// Replace the clipboard-read gate.
    pub fn set_can_read_clipboard<F>(&self, gate: F)
    where
        F: Fn() -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_read_clipboard = Some(Arc::new(gate));
    }

    /// Replace the notification gate.
    pub fn set_can_notify<F>(&self, gate: F)
    where
        F: Fn() -> BoxFuture<'static, bool> + Send + Sync + 'static,
    {
        self.overrides.write().can_notify = Some(Arc::new(gate));
    }

    /// Install a full set of overrides at once.
    pub fn set_overrides(&self, overrides: PolicyOverrides) {
        *self.overrides.write() = overrides;
    }

    /// Drop every override, restoring the default policy.
    pub fn clear_overrides(&self) {
        *self.overrides.write() = PolicyOverrides::default();
    }

    async fn ask(&self, message: &str) -> bool {
        match self.provider.prompt(message).await {
            Ok(allowed) => allowed,
            Err(err) => {
                warn!(%err, "consent prompt failed, denying");
                false
            }
        }
    }

    async fn default_can_load_extension_from_project(&self, extension_url: &str) -> bool {
        if self.trust.is_auto_trusted(extension_url) {
            return true;
        }
        // Not cached: each load of an untrusted source re-prompts.
        self.ask(&load_extension_prompt(extension_url)).await
    }

    async fn default_can_fetch(&self, resource_url: &str) -> bool {
        match self.fetch_policy {
            FetchPolicy::Permissive => true,
            FetchPolicy::Restrictive => self.restricted_fetch(resource_url).await,
        }
    }

    async fn restricted_fetch(&self, resource_url: &str) -> bool {
        let parsed = match ValidatedUrl::parse(resource_url) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(url = resource_url, %err, "fetch denied, invalid URL");
                return false;
            }
        };
        if parsed.is_local_data() {
            // data: and blob: cannot name a network origin.
            return true;
        }
        if self.trust.is_fetch_trusted(&parsed) {
            return true;
        }
        let origin = parsed.origin();
        if self.approved_fetch_origins.contains(&origin) {
            return true;
        }

        // Serialize prompts per origin; whoever wins the race prompts
        // and the rest answer from the cache.
        let gate = Arc::clone(&*self.pending_fetch_prompts.entry(origin.clone()).or_default());
        let guard = gate.lock().await;
        if self.approved_fetch_origins.contains(&origin) {
            return true;
        }

        let allowed = self.ask(&fetch_prompt(resource_url)).await;
        if allowed {
            self.approved_fetch_origins.insert(&origin);
            debug!(%origin, "origin approved for fetching this session");
        }
        drop(guard);
        self.pending_fetch_prompts.remove(&origin);
        allowed
    }

    async fn default_can_open_window(&self, website_url: &str) -> bool {
        if let Err(err) = ValidatedUrl::parse(website_url) {
            debug!(url = website_url, %err, "window open denied, invalid URL");
            return false;
        }
        // Never cached: every call re-prompts.
        self.ask(&open_window_prompt(website_url)).await
    }

    async fn default_can_redirect_tab(&self, website_url: &str) -> bool {
        if let Err(err) = ValidatedUrl::parse(website_url) {
            debug!(url = website_url, %err, "redirect denied, invalid URL");
            return false;
        }
        self.ask(&redirect_prompt(website_url)).await
    }
}

#[async_trait]
impl SecurityPolicy for SecurityManager {
    fn select_sandbox_mode(&self, extension_url: &str) -> SandboxMode {
        let selector = self.overrides.read().select_sandbox_mode.clone();
        match selector {
            Some(selector) => selector(extension_url),
            None => self.trust.select_sandbox_mode(extension_url),
        }
    }

    async fn can_load_extension_from_project(&self, extension_url: &str) -> bool {
        let check = self.overrides.read().can_load_extension_from_project.clone();
        match check {
            Some(check) => check(extension_url).await,
            None => self.default_can_load_extension_from_project(extension_url).await,
        }
    }

    async fn can_fetch(&self, resource_url: &str) -> bool {
        let check = self.overrides.read().can_fetch.clone();
        match check {
            Some(check) => check(resource_url).await,
            None => self.default_can_fetch(resource_url).await,
        }
    }

    async fn can_open_window(&self, website_url: &str) -> bool {
        let check = self.overrides.read().can_open_window.clone();
        match check {
            Some(check) => check(website_url).await,
            None => self.default_can_open_window(website_url).await,
        }
    }

    async fn can_redirect_tab(&self, website_url: &str) -> bool {
        let check = self.overrides.read().can_redirect_tab.clone();
        match check {
            Some(check) => check(website_url).await,
            None => self.default_can_redirect_tab(website_url).await,
        }
    }

    async fn can_record_audio(&self) -> bool {
        let gate = self.overrides.read().can_record_audio.clone();
        match gate {
            Some(gate) => gate().await,
            None => true,
        }
    }

    async fn can_record_video(&self) -> bool {
        let gate = self.overrides.read().can_record_video.clone();
        match gate {
            Some(gate) => gate().await,
            None => true,
        }
    }

    async fn can_read_clipboard(&self) -> bool {
        let gate = self.overrides.read().can_read_clipboard.clone();
        match gate {
            Some(gate) => gate().await,
            None => true,
        }
    }

    async fn can_notify(&self) -> bool {
        let gate = self.overrides.read().can_notify.clone();
        match gate {
            Some(gate) => gate().await,
            None => true,
        }
    }
}

fn load_extension_prompt(extension_url: &str) -> String {
    format!(
        "The project wants to load a custom extension from the URL:\n{extension_url}\n\
         While the code will be sandboxed, it will still have access to information about \
         your device such as your IP and general location. Make sure you trust the author \
         of this extension before continuing.\nAllow this?"
    )
}

fn fetch_prompt(resource_url: &str) -> String {
    format!(
        "The project wants to connect to the website:\n{resource_url}\n\
         This could be used to download images or sounds, implement multiplayer, access \
         an API, or for malicious purposes. This will share your IP address, general \
         location, and possibly other data with the website.\n\
         If allowed, further requests to the same website will be automatically allowed.\n\
         Allow this?"
    )
}

fn open_window_prompt(website_url: &str) -> String {
    format!(
        "The project wants to open a new window or tab with the URL:\n{website_url}\n\
         This website has not been reviewed by the editor developers. It may contain \
         dangerous or malicious code.\nAllow this?"
    )
}

fn redirect_prompt(website_url: &str) -> String {
    format!(
        "The project wants to navigate this tab to the URL:\n{website_url}\n\
         This website has not been reviewed by the editor developers. It may contain \
         dangerous or malicious code.\nAllow this?"
    )
}
