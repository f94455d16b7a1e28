//! Shared patterns for field shape checks

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Local part from the RFC 5322 atext set plus dots, then one or more
    /// dot-separated labels of 1-63 alphanumerics/hyphens with no leading
    /// or trailing hyphen.
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern is a valid regex");
}

/// Check an email address against the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "jane@example.com",
            "first.last+lease@mail.example.co.in",
            "o'brien@host",
            "x@a-b.org",
            "{tag}~me@example.com",
        ] {
            assert!(is_valid_email(email), "{} should be accepted", email);
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "bad@@x",
            "no-at-sign",
            "@example.com",
            "jane@",
            "jane@-host.com",
            "jane@host-.com",
            "jane@host..com",
            "jane doe@example.com",
        ] {
            assert!(!is_valid_email(email), "{} should be rejected", email);
        }
    }

    #[test]
    fn test_label_length_limit() {
        let label_63 = "a".repeat(63);
        let label_64 = "a".repeat(64);

        assert!(is_valid_email(&format!("me@{}.com", label_63)));
        assert!(!is_valid_email(&format!("me@{}.com", label_64)));
    }
}
