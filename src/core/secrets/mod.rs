//! Secret resolution.
//!
//! Secrets are requested by non-sensitive alias through a backend selected
//! at construction and fixed for the provider's lifetime. Resolved values
//! are request-scoped: fetched into a [`Zeroizing`] wrapper, used, and
//! wiped on drop. Only alias names ever reach diagnostics.
//!
//! ## Backends
//!
//! - **mock**: Default, always available. Deterministic placeholder values.
//! - **gcp**: Feature-gated (`gcp`). Google Secret Manager via the gcloud CLI.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretBackend` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Feature-gate if appropriate
//! 4. Re-export from this module

use std::fmt;
use std::str::FromStr;

use tracing::info;
use zeroize::Zeroizing;

use crate::error::{Result, SecretError};

#[cfg(feature = "gcp")]
pub mod gcp;
mod mock;

#[cfg(feature = "gcp")]
pub use gcp::GcpSecretManager;
pub use mock::MockSecrets;

/// A resolved secret value, wiped from memory on drop.
pub type SecretString = Zeroizing<String>;

/// Non-sensitive symbolic names for the secrets the agent needs.
///
/// This is a closed set; no other secret names are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretAlias {
    /// Database connection string
    DbDsn,
    /// Store platform API token
    StoreApiToken,
    /// Notification webhook URL
    SlackWebhookUrl,
}

impl SecretAlias {
    /// All supported aliases, in resolution order.
    pub const ALL: [SecretAlias; 3] = [
        SecretAlias::DbDsn,
        SecretAlias::StoreApiToken,
        SecretAlias::SlackWebhookUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretAlias::DbDsn => "DB_DSN",
            SecretAlias::StoreApiToken => "STORE_API_TOKEN",
            SecretAlias::SlackWebhookUrl => "SLACK_WEBHOOK_URL",
        }
    }
}

impl fmt::Display for SecretAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretAlias {
    type Err = SecretError;

    fn from_str(s: &str) -> std::result::Result<Self, SecretError> {
        match s {
            "DB_DSN" => Ok(SecretAlias::DbDsn),
            "STORE_API_TOKEN" => Ok(SecretAlias::StoreApiToken),
            "SLACK_WEBHOOK_URL" => Ok(SecretAlias::SlackWebhookUrl),
            other => Err(SecretError::UnknownAlias(other.to_string())),
        }
    }
}

/// Secret resolution backend trait.
///
/// Implementations must never include resolved values in logs or error
/// messages; the alias name is the only identifier that may appear.
pub trait SecretBackend {
    /// Resolve an alias to its secret value.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::ResolveFailed` if the backend cannot produce
    /// a value for the alias.
    fn resolve(&self, alias: SecretAlias) -> Result<SecretString>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

/// Alias-based secret access with a backend fixed at construction.
pub struct SecretProvider {
    backend: Box<dyn SecretBackend>,
}

impl SecretProvider {
    /// Placeholder provider returning deterministic fake values.
    ///
    /// Safe for demos and tests; never contacts a real secret store.
    pub fn mock() -> Self {
        Self {
            backend: Box::new(MockSecrets),
        }
    }

    /// Live provider backed by Google Secret Manager.
    ///
    /// # Errors
    ///
    /// Fails at construction — before any secret is requested — if the
    /// crate was built without the `gcp` feature or the `gcloud` CLI is
    /// not installed.
    #[cfg(feature = "gcp")]
    pub fn live(project_id: &str) -> Result<Self> {
        Ok(Self {
            backend: Box::new(GcpSecretManager::new(project_id)?),
        })
    }

    /// Live provider backed by Google Secret Manager.
    ///
    /// # Errors
    ///
    /// Fails at construction — before any secret is requested — if the
    /// crate was built without the `gcp` feature or the `gcloud` CLI is
    /// not installed.
    #[cfg(not(feature = "gcp"))]
    pub fn live(_project_id: &str) -> Result<Self> {
        Err(SecretError::BackendUnavailable(
            "shopsync was built without the `gcp` feature".to_string(),
        )
        .into())
    }

    /// Provider with an injected backend (used by tests).
    pub fn with_backend(backend: Box<dyn SecretBackend>) -> Self {
        Self { backend }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Resolve an alias through the active backend.
    ///
    /// Logs the alias name only; the value is never part of any
    /// diagnostic, in any mode.
    pub fn resolve(&self, alias: SecretAlias) -> Result<SecretString> {
        info!(alias = %alias, backend = self.backend.name(), "requesting secret (value hidden)");
        self.backend.resolve(alias)
    }
}
