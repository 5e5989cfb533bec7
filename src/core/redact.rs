//! Display masking for sensitive strings.
//!
//! [`redact`] is a pure transform used wherever a partial value is shown
//! to a human. Diagnostics emitted during a run never carry values at all;
//! they carry alias names and [`fingerprint`]s instead.

use sha2::{Digest, Sha256};

use crate::core::constants::MOCK_MARKER;

/// Mask a potentially sensitive string for safe display.
///
/// Keeps the first `keep` characters and replaces the remainder with `*`.
/// Strings at or below `keep` characters are fully masked. Placeholder
/// values carrying the [`MOCK_MARKER`] prefix are known non-secrets and
/// pass through unchanged. Empty input yields empty output.
///
/// Operates on characters, not bytes, so non-Latin input keeps its length.
pub fn redact(text: &str, keep: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.starts_with(MOCK_MARKER) {
        return text.to_string();
    }

    let len = text.chars().count();
    if len <= keep {
        return "*".repeat(len);
    }

    let mut out: String = text.chars().take(keep).collect();
    out.extend(std::iter::repeat('*').take(len - keep));
    out
}

/// Short SHA-256 fingerprint of a value, safe to log.
///
/// Lets operators correlate a value across diagnostics without ever
/// seeing it.
pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(redact("", 3), "");
    }

    #[test]
    fn test_short_input_fully_masked() {
        assert_eq!(redact("abc", 3), "***");
        assert_eq!(redact("ab", 3), "**");
        assert_eq!(redact("a", 5), "*");
    }

    #[test]
    fn test_long_input_keeps_prefix() {
        assert_eq!(redact("postgres://user:pw@host/db", 3), "pos***********************");
        assert_eq!(redact("hooks/T000/B000/XXXX", 5), "hooks***************");
    }

    #[test]
    fn test_mock_marker_passes_through() {
        assert_eq!(redact("MOCK::DB_DSN", 3), "MOCK::DB_DSN");
        assert_eq!(redact("MOCK::SLACK_WEBHOOK_URL", 5), "MOCK::SLACK_WEBHOOK_URL");
    }

    #[test]
    fn test_non_ascii_masked_by_character() {
        // 5 chars, keep 3
        assert_eq!(redact("올리브영몰", 3), "올리브**");
        assert_eq!(redact("가격", 3), "**");
    }

    #[test]
    fn test_fingerprint_is_short_and_stable() {
        let a = fingerprint("MOCK::DB_DSN");
        let b = fingerprint("MOCK::DB_DSN");
        let c = fingerprint("MOCK::STORE_API_TOKEN");

        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    proptest! {
        #[test]
        fn prop_short_inputs_fully_masked(s in "\\PC{0,8}", keep in 0usize..16) {
            prop_assume!(!s.starts_with("MOCK::"));
            let len = s.chars().count();
            prop_assume!(len <= keep && len > 0);

            let out = redact(&s, keep);
            prop_assert_eq!(out.chars().count(), len);
            prop_assert!(out.chars().all(|c| c == '*'));
        }

        #[test]
        fn prop_long_inputs_keep_prefix_and_length(s in "\\PC{1,64}", keep in 0usize..8) {
            prop_assume!(!s.starts_with("MOCK::"));
            let len = s.chars().count();
            prop_assume!(len > keep);

            let out = redact(&s, keep);
            prop_assert_eq!(out.chars().count(), len);

            let kept: String = s.chars().take(keep).collect();
            prop_assert!(out.starts_with(&kept));
            prop_assert!(out.chars().skip(keep).all(|c| c == '*'));
        }

        #[test]
        fn prop_marker_prefix_unchanged(suffix in "\\PC{0,32}") {
            let s = format!("MOCK::{}", suffix);
            prop_assert_eq!(redact(&s, 3), s);
        }
    }
}
