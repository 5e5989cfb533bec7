//! Google Secret Manager backend.
//!
//! Resolves secrets through the gcloud CLI. Enable with `--features gcp`.
//!
//! ## Requirements
//!
//! - `gcloud` CLI must be installed and authenticated
//! - User must have secretmanager.versions.access on the project
//!
//! Aliases never leave the process; they are mapped to real secret ids
//! before the CLI is invoked.

use std::process::{Command, Stdio};

use tracing::trace;

use super::{SecretAlias, SecretBackend, SecretString};
use crate::error::{Result, SecretError};

/// Live backend resolving aliases through `gcloud secrets versions access`.
pub struct GcpSecretManager {
    project_id: String,
}

impl GcpSecretManager {
    /// Create a new Secret Manager backend for the given project.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::BackendUnavailable` if the `gcloud` CLI is
    /// not on PATH. This check runs here, at construction, so a
    /// misconfigured live deployment fails before any secret is requested.
    pub fn new(project_id: &str) -> Result<Self> {
        which::which("gcloud").map_err(|_| {
            SecretError::BackendUnavailable(
                "gcloud CLI not found. Install it from https://cloud.google.com/sdk/docs/install"
                    .to_string(),
            )
        })?;

        Ok(Self {
            project_id: project_id.to_string(),
        })
    }

    /// Map a safe alias to the real secret id in Secret Manager.
    fn secret_id(alias: SecretAlias) -> &'static str {
        match alias {
            SecretAlias::DbDsn => "db-dsn-prod",
            SecretAlias::StoreApiToken => "shopify-token-v1",
            SecretAlias::SlackWebhookUrl => "slack-alert-hook",
        }
    }
}

impl SecretBackend for GcpSecretManager {
    fn resolve(&self, alias: SecretAlias) -> Result<SecretString> {
        trace!(alias = %alias, project = %self.project_id, "accessing secret version");

        let output = Command::new("gcloud")
            .args([
                "secrets",
                "versions",
                "access",
                "latest",
                "--secret",
                Self::secret_id(alias),
                "--project",
                &self.project_id,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SecretError::ResolveFailed {
                alias: alias.as_str(),
                reason: format!("failed to spawn gcloud: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SecretError::ResolveFailed {
                alias: alias.as_str(),
                reason: format!("gcloud secrets access failed: {}", stderr.trim()),
            }
            .into());
        }

        let value = String::from_utf8(output.stdout).map_err(|_| SecretError::ResolveFailed {
            alias: alias.as_str(),
            reason: "secret payload is not valid UTF-8".to_string(),
        })?;

        trace!(alias = %alias, value_len = value.len(), "secret resolved");
        Ok(SecretString::new(value))
    }

    fn name(&self) -> &'static str {
        "gcp-secret-manager"
    }
}
