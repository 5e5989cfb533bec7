//! Constants used throughout shopsync.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.shopsync.toml).
pub const CONFIG_FILE: &str = ".shopsync.toml";

/// Environment variable naming the project identifier.
pub const ENV_PROJECT_ID: &str = "SHOPSYNC_PROJECT_ID";

/// Environment variable naming the deployment environment (dev/staging/prod).
pub const ENV_ENV_NAME: &str = "SHOPSYNC_ENV";

/// Environment variable naming the store platform.
pub const ENV_STORE: &str = "SHOPSYNC_STORE";

/// Default project identifier when none is configured.
pub const DEFAULT_PROJECT_ID: &str = "demo-project";

/// Default deployment environment.
pub const DEFAULT_ENV_NAME: &str = "dev";

/// Default B2B portal display name.
pub const DEFAULT_PORTAL: &str = "B2B_PORTAL";

/// Marker prefix carried by placeholder secret values.
///
/// Values with this prefix are known non-secrets and pass through
/// redaction unchanged.
pub const MOCK_MARKER: &str = "MOCK::";

/// Default number of leading characters preserved by redaction.
pub const REDACT_KEEP: usize = 3;
