//! Notification sink.
//!
//! Accepts a single text message per call and records it in the log;
//! delivery to a real message bus is out of scope. When disabled, every
//! call is a no-op. The webhook URL is reduced to a fingerprint at
//! construction and never appears in diagnostics.

use tracing::{debug, info};

use crate::core::redact::fingerprint;
use crate::core::secrets::SecretString;
use crate::error::{NotifyError, Result};

/// Log-only notification sink.
pub struct Notifier {
    /// Fingerprint of the webhook; the URL itself is discarded after
    /// construction.
    webhook: Option<String>,
}

impl Notifier {
    /// Sink bound to a webhook. Keeps only the webhook's fingerprint.
    pub fn new(webhook: &SecretString) -> Self {
        Self {
            webhook: Some(fingerprint(webhook)),
        }
    }

    /// Sink that drops every message.
    pub fn disabled() -> Self {
        Self { webhook: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook.is_some()
    }

    /// Record one message.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::EmptyMessage` if the message is blank.
    /// Disabled sinks accept anything and do nothing.
    pub fn send(&self, message: &str) -> Result<()> {
        let Some(webhook) = &self.webhook else {
            debug!("notifications disabled, dropping message");
            return Ok(());
        };

        if message.trim().is_empty() {
            return Err(NotifyError::EmptyMessage.into());
        }

        info!(webhook = %webhook, text = %message, "notification");
        Ok(())
    }
}
