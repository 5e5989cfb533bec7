//! Deterministic placeholder secret backend.
//!
//! Returns `MOCK::<ALIAS>` for every request. The marker prefix flags the
//! value as a known non-secret, so redaction shows it as-is.

use super::{SecretAlias, SecretBackend, SecretString};
use crate::core::constants::MOCK_MARKER;
use crate::error::Result;

/// Placeholder backend for demos and tests.
pub struct MockSecrets;

impl SecretBackend for MockSecrets {
    fn resolve(&self, alias: SecretAlias) -> Result<SecretString> {
        Ok(SecretString::new(format!("{}{}", MOCK_MARKER, alias)))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_deterministic() {
        let backend = MockSecrets;

        let first = backend.resolve(SecretAlias::DbDsn).unwrap();
        let second = backend.resolve(SecretAlias::DbDsn).unwrap();
        assert_eq!(*first, *second);
        assert_eq!(*first, "MOCK::DB_DSN");
    }

    #[test]
    fn test_distinct_aliases_yield_distinct_values() {
        let backend = MockSecrets;

        let dsn = backend.resolve(SecretAlias::DbDsn).unwrap();
        let token = backend.resolve(SecretAlias::StoreApiToken).unwrap();
        let webhook = backend.resolve(SecretAlias::SlackWebhookUrl).unwrap();

        assert_ne!(*dsn, *token);
        assert_ne!(*token, *webhook);
        assert_ne!(*dsn, *webhook);
    }
}
