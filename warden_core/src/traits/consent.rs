//! Consent prompt providers.
//!
//! The negotiator never renders UI. When a decision requires user
//! interaction it hands a human-readable message to a
//! [`ConsentProvider`] and suspends until the provider resolves. A
//! provider may take arbitrarily long; the engine imposes no
//! deadline on a pending prompt.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

use crate::error::ConsentError;
use crate::Result;

/// Collaborator that presents a consent prompt to the user.
#[async_trait]
pub trait ConsentProvider: Send + Sync {
    /// Present `message` to the user and resolve to their answer.
    ///
    /// `true` means the user approved the operation. A provider
    /// failure is treated as a denial by the engine.
    async fn prompt(&self, message: &str) -> Result<bool, ConsentError>;
}

/// Grants every prompt without user interaction.
///
/// Useful for tests and for embedders that do their own vetting
/// before extension code ever reaches the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl ConsentProvider for AllowAll {
    async fn prompt(&self, _message: &str) -> Result<bool, ConsentError> {
        Ok(true)
    }
}

/// Denies every prompt without user interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl ConsentProvider for DenyAll {
    async fn prompt(&self, _message: &str) -> Result<bool, ConsentError> {
        Ok(false)
    }
}

/// A consent prompt forwarded to the host UI.
///
/// The receiving side displays the message however it likes and
/// answers through [`ConsentRequest::respond`]. Dropping the request
/// without responding denies the prompt.
#[derive(Debug)]
pub struct ConsentRequest {
    message: String,
    responder: oneshot::Sender<bool>,
}

impl ConsentRequest {
    /// The human-readable prompt text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Deliver the user's answer.
    pub fn respond(self, allow: bool) {
        // The asking side may have gone away; nothing to do then.
        let _ = self.responder.send(allow);
    }
}

/// A [`ConsentProvider`] that forwards prompts over a channel.
///
/// This is the bridge for hosts whose UI runs elsewhere: the engine
/// side awaits the answer while the UI side consumes
/// [`ConsentRequest`]s from the paired receiver.
#[derive(Debug, Clone)]
pub struct ChannelConsentProvider {
    tx: mpsc::Sender<ConsentRequest>,
}

/// Create a channel-backed consent provider and the receiver the
/// host UI should drain.
pub fn channel(buffer: usize) -> (ChannelConsentProvider, mpsc::Receiver<ConsentRequest>) {
    let (tx, rx) = mpsc::channel(buffer);
    (ChannelConsentProvider { tx }, rx)
}

#[async_trait]
impl ConsentProvider for ChannelConsentProvider {
    async fn prompt(&self, message: &str) -> Result<bool, ConsentError> {
        let (responder, answer) = oneshot::channel();
        let request = ConsentRequest {
            message: message.to_string(),
            responder,
        };
        trace!(message, "forwarding consent prompt to host");
        self.tx
            .send(request)
            .await
            .map_err(|_| ConsentError::Unavailable("consent channel closed".to_string()))?;
        answer
            .await
            .map_err(|_| ConsentError::Unavailable("consent prompt dropped without an answer".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[tokio::test]
    async fn allow_all_and_deny_all() {
        assert!(AllowAll.prompt("anything").await.unwrap());
        assert!(!DenyAll.prompt("anything").await.unwrap());
    }

    #[tokio::test]
    async fn channel_provider_round_trip() {
        init_tracing();
        let (provider, mut requests) = channel(4);

        let ui = tokio::spawn(async move {
            let request = requests.recv().await.expect("prompt arrives");
            assert_eq!(request.message(), "may I?");
            request.respond(true);
        });

        assert!(provider.prompt("may I?").await.unwrap());
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_request_is_an_error() {
        let (provider, mut requests) = channel(4);

        let ui = tokio::spawn(async move {
            // Drop the request without answering.
            let _ = requests.recv().await;
        });

        let err = provider.prompt("may I?").await.unwrap_err();
        assert!(matches!(err, ConsentError::Unavailable(_)));
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn closed_channel_is_an_error() {
        let (provider, requests) = channel(4);
        drop(requests);

        let err = provider.prompt("may I?").await.unwrap_err();
        assert!(matches!(err, ConsentError::Unavailable(_)));
    }
}
