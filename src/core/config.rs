//! Configuration management.
//!
//! Collects configuration once at startup into an immutable [`SyncConfig`]:
//! built-in defaults, overlaid by an optional `.shopsync.toml`, overlaid by
//! environment variables. The resulting value is passed explicitly to all
//! collaborators; nothing reads the environment after load.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Store platform the agent syncs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Shopify,
    Woocommerce,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Shopify => "shopify",
            StoreKind::Woocommerce => "woocommerce",
        }
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "shopify" => Ok(StoreKind::Shopify),
            "woocommerce" => Ok(StoreKind::Woocommerce),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable agent configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Cloud project identifier (used by the live secret backend)
    pub project_id: String,
    /// Deployment environment name (dev/staging/prod)
    pub env_name: String,
    /// Store platform to sync against
    pub store: StoreKind,
    /// Display name of the B2B portal
    pub portal: String,
    /// Whether completion/error notifications are emitted
    pub notify: bool,
}

/// `[shopsync]` table of `.shopsync.toml`. All fields optional.
#[derive(Debug, Default, Deserialize)]
struct FileMeta {
    project_id: Option<String>,
    env: Option<String>,
    store: Option<String>,
    portal: Option<String>,
    notify: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    shopsync: FileMeta,
}

impl SyncConfig {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration from defaults, `.shopsync.toml`, and environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::UnknownStore` if the store platform is unrecognized.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        let file = if path.exists() {
            debug!(path = %path.display(), "loading config file");
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            let parsed: FileConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
            Some(parsed.shopsync)
        } else {
            None
        };

        let config = Self::from_sources(file, &|name| std::env::var(name).ok())?;

        debug!(
            project_id = %config.project_id,
            env = %config.env_name,
            store = %config.store,
            "config loaded"
        );

        Ok(config)
    }

    /// Merge defaults, optional file values, and environment lookups.
    fn from_sources(
        file: Option<FileMeta>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();

        let project_id = env(constants::ENV_PROJECT_ID)
            .or(file.project_id)
            .unwrap_or_else(|| constants::DEFAULT_PROJECT_ID.to_string());

        let env_name = env(constants::ENV_ENV_NAME)
            .or(file.env)
            .unwrap_or_else(|| constants::DEFAULT_ENV_NAME.to_string());

        if env_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "env",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let store = env(constants::ENV_STORE)
            .or(file.store)
            .as_deref()
            .map(StoreKind::from_str)
            .transpose()?
            .unwrap_or(StoreKind::Shopify);

        let portal = file
            .portal
            .unwrap_or_else(|| constants::DEFAULT_PORTAL.to_string());

        let notify = file.notify.unwrap_or(true);

        Ok(Self {
            project_id,
            env_name,
            store,
            portal,
            notify,
        })
    }
}
