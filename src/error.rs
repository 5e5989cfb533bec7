//! Error types for shopsync.
//!
//! Errors are grouped by subsystem (`ConfigError`, `SecretError`,
//! `NotifyError`) and aggregated into the top-level [`Error`]. The agent's
//! outer boundary reports only [`Error::category`], never the details.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short classification name for this error.
    ///
    /// This is the only part of an error that crosses the agent's outer
    /// boundary into notifications; details stay in the logs.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Secret(_) => "secrets",
            Error::Notify(_) => "notify",
            Error::Io(_) => "io",
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown store platform: '{0}' (expected 'shopify' or 'woocommerce')")]
    UnknownStore(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Secret resolution errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("unknown secret alias: '{0}'")]
    UnknownAlias(String),

    #[error("live secret backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("failed to resolve secret alias '{alias}': {reason}")]
    ResolveFailed { alias: &'static str, reason: String },
}

/// Notification sink errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification sink rejected empty message")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, Error>;
